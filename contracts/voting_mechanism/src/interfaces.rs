//! Cross-contract interfaces consumed by the governance ledger.
//!
//! Neither collaborator is implemented here; the ledger only stores their
//! addresses and calls them through the generated clients.

use soroban_sdk::{contractclient, Address, Env};

/// Answers whether a caller may administer the ledger and create proposals.
#[contractclient(name = "AuthorityOracleClient")]
pub trait AuthorityOracle {
    fn is_authorized(env: Env, caller: Address) -> bool;
}

/// Reports how much voting power a voter may commit at a given ledger.
#[contractclient(name = "VotingPowerSourceClient")]
pub trait VotingPowerSource {
    fn available_power(env: Env, voter: Address, at_ledger: u32) -> i128;
}
