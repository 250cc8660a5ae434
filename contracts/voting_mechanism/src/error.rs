//! Error types for the Voting Mechanism contract

use soroban_sdk::contracterror;

/// Governance ledger errors.
///
/// Codes 100..=115 are part of the public calling surface and must not be
/// renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Authority is not configured or the caller is not permitted
    NotAuthorized = 100,
    /// Title is empty or longer than 100 bytes
    InvalidProposalTitle = 101,
    /// Description is empty or longer than 200 bytes
    InvalidProposalDesc = 102,
    /// Voting duration outside 1..=100 ledgers
    InvalidDuration = 103,
    /// The next proposal id is already occupied
    ProposalAlreadyExists = 104,
    /// Proposal with given ID was not found
    ProposalNotFound = 105,
    /// Current ledger is outside the voting window
    VotingNotOpen = 106,
    /// Voter already has a recorded vote on this proposal
    AlreadyVoted = 107,
    /// Amount exceeds the voter's available voting power
    InsufficientBalance = 108,
    /// Amount (or voting power ceiling) must be positive
    InvalidAmount = 109,
    /// Participation is below the quorum threshold
    QuorumNotMet = 110,
    /// Voting window plus timelock has not elapsed yet
    TimelockActive = 111,
    /// Yes votes are below the 51% majority
    NotPassed = 112,
    /// Proposal has already been executed
    AlreadyExecuted = 113,
    /// Quorum threshold must be in 1..=100
    InvalidQuorum = 114,
    /// Timelock duration must be greater than zero
    InvalidTimelock = 115,
    /// Authority contract can only be set once
    AuthorityAlreadySet = 116,
    /// Authority contract cannot be the burn address
    InvalidAuthority = 117,
    ArithmeticOverflow = 118,
}
