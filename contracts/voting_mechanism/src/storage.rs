//! Storage keys and helpers for the Voting Mechanism contract

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{GovernanceConfig, Proposal, Vote};

/// Roughly 30 days of ledgers at 5s per ledger.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

/// Storage keys for the voting contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the authority oracle, set once (instance storage)
    AuthorityContract,
    /// Optional voting power source (instance storage)
    VotingPowerSource,
    /// Governance configuration (instance storage)
    Config,
    /// Id the next proposal will receive (instance storage)
    NextProposalId,
    /// A proposal by id (persistent storage)
    Proposal(u64),
    /// A vote by (proposal id, voter) (persistent storage)
    Vote(u64, Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ============================================================================
// Authority & Collaborators
// ============================================================================

pub fn get_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AuthorityContract)
}

pub fn has_authority(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::AuthorityContract)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AuthorityContract, authority);
    bump_instance(env);
}

pub fn get_voting_power_source(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::VotingPowerSource)
}

pub fn set_voting_power_source(env: &Env, source: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::VotingPowerSource, source);
    bump_instance(env);
}

// ============================================================================
// Configuration
// ============================================================================

/// Current configuration, falling back to defaults until first written
pub fn get_config(env: &Env) -> GovernanceConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

pub fn set_config(env: &Env, config: &GovernanceConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ============================================================================
// Proposals
// ============================================================================

pub fn get_next_proposal_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextProposalId)
        .unwrap_or(0)
}

pub fn set_next_proposal_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextProposalId, &id);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn proposal_exists(env: &Env, proposal_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Proposal(proposal_id))
}

pub fn set_proposal(env: &Env, proposal_id: u64, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

// ============================================================================
// Votes
// ============================================================================

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<Vote> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn set_vote(env: &Env, proposal_id: u64, voter: &Address, vote: &Vote) {
    let key = DataKey::Vote(proposal_id, voter.clone());
    env.storage().persistent().set(&key, vote);
    bump_persistent(env, &key);
}
