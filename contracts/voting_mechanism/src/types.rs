//! Data types for the Voting Mechanism contract

use soroban_sdk::{contracttype, Address, String};

/// Fixed yes-vote majority, in percent of votes cast.
pub const MAJORITY_PERCENT: i128 = 51;

pub const MAX_TITLE_LEN: u32 = 100;
pub const MAX_DESCRIPTION_LEN: u32 = 200;
pub const MAX_VOTING_DURATION: u32 = 100;

/// Lifecycle position of a proposal relative to the current ledger
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    /// Votes are accepted (start..=end, inclusive)
    Open = 0,
    /// Voting closed, timelock still running
    AwaitingTimelock = 1,
    /// Timelock elapsed, execution may be attempted
    Ready = 2,
    /// Executed and passed; terminal
    Executed = 3,
}

/// A governance proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub title: String,
    pub description: String,
    /// Voting-power-weighted tally of yes votes
    pub yes_votes: i128,
    /// Voting-power-weighted tally of no votes
    pub no_votes: i128,
    /// Ledger sequence at creation
    pub start_time: u32,
    /// Last ledger at which votes are accepted
    pub end_time: u32,
    pub creator: Address,
    pub executed: bool,
    /// Set only when the proposal is executed
    pub passed: Option<bool>,
}

impl Proposal {
    pub fn is_open_at(&self, ledger: u32) -> bool {
        self.start_time <= ledger && ledger <= self.end_time
    }

    /// First ledger at which execution may be attempted, `None` if it does
    /// not fit in a ledger sequence.
    pub fn unlocks_at(&self, timelock_duration: u32) -> Option<u32> {
        self.end_time.checked_add(timelock_duration)
    }

    pub fn status_at(&self, ledger: u32, timelock_duration: u32) -> ProposalStatus {
        if self.executed {
            return ProposalStatus::Executed;
        }
        // start_time is the creation ledger, so nothing precedes Open
        if ledger <= self.end_time {
            return ProposalStatus::Open;
        }
        match self.unlocks_at(timelock_duration) {
            Some(unlock) if ledger >= unlock => ProposalStatus::Ready,
            _ => ProposalStatus::AwaitingTimelock,
        }
    }
}

/// A single recorded vote, keyed by (proposal id, voter)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub amount: i128,
    /// true = yes
    pub support: bool,
    /// Ledger sequence at which the vote was cast
    pub timestamp: u32,
}

/// Process-wide governance parameters, mutated only by the authority
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceConfig {
    /// Participation required, in percent of `total_voting_power` (1..=100)
    pub quorum_threshold: u32,
    /// Ledgers that must pass after voting closes before execution
    pub timelock_duration: u32,
    /// Upper bound on any single vote and quorum denominator
    pub total_voting_power: i128,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            quorum_threshold: 51,
            timelock_duration: 10,
            total_voting_power: 1_000_000,
        }
    }
}
