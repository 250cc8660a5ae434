#![no_std]

//! # Voting Mechanism
//!
//! A Soroban smart contract that acts as a governance ledger: it records
//! proposals, collects voting-power-weighted yes/no votes inside a ledger
//! window, and executes proposals that cleared quorum and majority once a
//! timelock has elapsed after voting closed.
//!
//! ## Lifecycle
//! `Open(start..=end)` → `AwaitingTimelock` → `Ready` → `Executed`
//!
//! A failed execution attempt (quorum or majority) leaves the proposal in
//! `Ready`; it can be retried and never reaches a rejected terminal state.
//!
//! ## Collaborators
//! - Authority oracle: gates configuration and proposal creation
//! - Voting power source (optional): bounds each vote
//! - Ledger sequence: the logical clock for every window and timelock
//!
//! Configuration is read at the moment of each call. Changing the quorum or
//! timelock affects proposals that are already pending.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod error;
mod events;
mod interfaces;
mod storage;
mod tally;
mod types;

pub use error::VotingError;
pub use interfaces::{
    AuthorityOracle, AuthorityOracleClient, VotingPowerSource, VotingPowerSourceClient,
};
pub use types::{GovernanceConfig, Proposal, ProposalStatus, Vote};

use tally::TallyOutcome;
use types::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, MAX_VOTING_DURATION};

/// Stellar's all-zero account; never a valid authority.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct VotingMechanism;

#[contractimpl]
impl VotingMechanism {
    // ========================================================================
    // Administration
    // ========================================================================

    /// Designate the authority contract. Succeeds exactly once.
    ///
    /// # Errors
    /// * `InvalidAuthority` - Address is the burn address
    /// * `AuthorityAlreadySet` - An authority has already been configured
    pub fn set_authority_contract(env: Env, authority: Address) -> Result<bool, VotingError> {
        let burn = Address::from_string(&String::from_str(&env, BURN_ADDRESS));
        if authority == burn {
            return Err(VotingError::InvalidAuthority);
        }
        if storage::has_authority(&env) {
            return Err(VotingError::AuthorityAlreadySet);
        }

        storage::set_authority(&env, &authority);
        events::emit_authority_set(&env, &authority, env.ledger().sequence());

        Ok(true)
    }

    /// Update the quorum threshold (percent of total voting power)
    ///
    /// # Errors
    /// * `InvalidQuorum` - Value outside 1..=100
    /// * `NotAuthorized` - No authority configured or caller rejected
    pub fn set_quorum_threshold(
        env: Env,
        caller: Address,
        value: u32,
    ) -> Result<bool, VotingError> {
        if value == 0 || value > 100 {
            return Err(VotingError::InvalidQuorum);
        }
        require_authority(&env, &caller)?;

        let mut config = storage::get_config(&env);
        let old = config.quorum_threshold;
        config.quorum_threshold = value;
        storage::set_config(&env, &config);

        events::emit_quorum_updated(&env, old, value, &caller);
        Ok(true)
    }

    /// Update the timelock, in ledgers, applied after voting closes
    ///
    /// # Errors
    /// * `InvalidTimelock` - Value is zero
    /// * `NotAuthorized` - No authority configured or caller rejected
    pub fn set_timelock_duration(
        env: Env,
        caller: Address,
        value: u32,
    ) -> Result<bool, VotingError> {
        if value == 0 {
            return Err(VotingError::InvalidTimelock);
        }
        require_authority(&env, &caller)?;

        let mut config = storage::get_config(&env);
        let old = config.timelock_duration;
        config.timelock_duration = value;
        storage::set_config(&env, &config);

        events::emit_timelock_updated(&env, old, value, &caller);
        Ok(true)
    }

    /// Update the total voting power used as vote ceiling and quorum base
    ///
    /// # Errors
    /// * `InvalidAmount` - Value is not positive
    /// * `NotAuthorized` - No authority configured or caller rejected
    pub fn set_total_voting_power(
        env: Env,
        caller: Address,
        value: i128,
    ) -> Result<bool, VotingError> {
        if value <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        require_authority(&env, &caller)?;

        let mut config = storage::get_config(&env);
        let old = config.total_voting_power;
        config.total_voting_power = value;
        storage::set_config(&env, &config);

        events::emit_voting_power_ceiling_updated(&env, old, value, &caller);
        Ok(true)
    }

    /// Point the ledger at a voting power source consulted on every vote
    ///
    /// # Errors
    /// * `NotAuthorized` - No authority configured or caller rejected
    pub fn set_voting_power_source(
        env: Env,
        caller: Address,
        source: Address,
    ) -> Result<bool, VotingError> {
        require_authority(&env, &caller)?;

        storage::set_voting_power_source(&env, &source);
        events::emit_voting_power_source_set(&env, &source, &caller);
        Ok(true)
    }

    // ========================================================================
    // Core Proposal Functions
    // ========================================================================

    /// Create a proposal whose voting window is `[now, now + duration]`
    ///
    /// Checks run in this order and the first failure is returned.
    ///
    /// # Errors
    /// * `NotAuthorized` - No authority configured or caller rejected
    /// * `InvalidProposalTitle` - Title empty or longer than 100 characters
    /// * `InvalidProposalDesc` - Description empty or longer than 200 characters
    /// * `InvalidDuration` - Duration outside 1..=100 ledgers
    /// * `ProposalAlreadyExists` - Next id already occupied
    pub fn create_proposal(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        duration: u32,
    ) -> Result<u64, VotingError> {
        require_authority(&env, &caller)?;

        if !char_len_within(&title, MAX_TITLE_LEN) {
            return Err(VotingError::InvalidProposalTitle);
        }
        if !char_len_within(&description, MAX_DESCRIPTION_LEN) {
            return Err(VotingError::InvalidProposalDesc);
        }
        if duration == 0 || duration > MAX_VOTING_DURATION {
            return Err(VotingError::InvalidDuration);
        }

        let proposal_id = storage::get_next_proposal_id(&env);
        if storage::proposal_exists(&env, proposal_id) {
            return Err(VotingError::ProposalAlreadyExists);
        }
        let next_id = proposal_id
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;

        let now = env.ledger().sequence();
        let end_time = now
            .checked_add(duration)
            .ok_or(VotingError::ArithmeticOverflow)?;

        let proposal = Proposal {
            title: title.clone(),
            description,
            yes_votes: 0,
            no_votes: 0,
            start_time: now,
            end_time,
            creator: caller.clone(),
            executed: false,
            passed: None,
        };

        storage::set_proposal(&env, proposal_id, &proposal);
        storage::set_next_proposal_id(&env, next_id);

        events::emit_proposal_created(&env, proposal_id, &caller, &title, now, end_time);

        Ok(proposal_id)
    }

    /// Cast a single weighted vote on a proposal
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `AlreadyVoted` - Voter already voted on this proposal
    /// * `VotingNotOpen` - Current ledger outside `start_time..=end_time`
    /// * `InvalidAmount` - Amount is not positive
    /// * `InsufficientBalance` - Amount above the voter's available power
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        amount: i128,
        support: bool,
    ) -> Result<bool, VotingError> {
        voter.require_auth();

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        if storage::has_voted(&env, proposal_id, &voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let now = env.ledger().sequence();
        if !proposal.is_open_at(now) {
            return Err(VotingError::VotingNotOpen);
        }

        if amount <= 0 {
            return Err(VotingError::InvalidAmount);
        }
        if amount > available_power(&env, &voter, now) {
            return Err(VotingError::InsufficientBalance);
        }

        if support {
            proposal.yes_votes = proposal
                .yes_votes
                .checked_add(amount)
                .ok_or(VotingError::ArithmeticOverflow)?;
        } else {
            proposal.no_votes = proposal
                .no_votes
                .checked_add(amount)
                .ok_or(VotingError::ArithmeticOverflow)?;
        }

        let vote = Vote {
            amount,
            support,
            timestamp: now,
        };

        storage::set_proposal(&env, proposal_id, &proposal);
        storage::set_vote(&env, proposal_id, &voter, &vote);
        storage::bump_instance(&env);

        events::emit_vote_cast(&env, proposal_id, &voter, amount, support, now);

        Ok(true)
    }

    /// Execute a proposal once its timelock has elapsed. Anyone may call.
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `AlreadyExecuted` - Proposal has already been executed
    /// * `TimelockActive` - Ledger is before `end_time + timelock_duration`
    /// * `QuorumNotMet` - Participation below the quorum threshold
    /// * `NotPassed` - Yes votes below the 51% majority
    pub fn execute_proposal(env: Env, proposal_id: u64) -> Result<bool, VotingError> {
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        if proposal.executed {
            return Err(VotingError::AlreadyExecuted);
        }

        let config = storage::get_config(&env);
        let now = env.ledger().sequence();

        // An unlock ledger past u32::MAX can never be reached
        let unlocked = proposal
            .unlocks_at(config.timelock_duration)
            .is_some_and(|unlock| now >= unlock);
        if !unlocked {
            return Err(VotingError::TimelockActive);
        }

        match tally::evaluate(
            proposal.yes_votes,
            proposal.no_votes,
            config.quorum_threshold,
            config.total_voting_power,
        )? {
            TallyOutcome::QuorumNotMet => return Err(VotingError::QuorumNotMet),
            TallyOutcome::MajorityNotMet => return Err(VotingError::NotPassed),
            TallyOutcome::Passed => {}
        }

        proposal.executed = true;
        proposal.passed = Some(true);
        storage::set_proposal(&env, proposal_id, &proposal);
        storage::bump_instance(&env);

        events::emit_proposal_executed(
            &env,
            proposal_id,
            proposal.yes_votes,
            proposal.no_votes,
            now,
        );

        Ok(true)
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get proposal details by ID
    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        storage::get_proposal(&env, proposal_id)
    }

    /// Number of proposals created so far (also the next id)
    pub fn get_proposal_count(env: Env) -> u64 {
        storage::get_next_proposal_id(&env)
    }

    /// Get the vote a voter cast on a proposal
    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<Vote> {
        storage::get_vote(&env, proposal_id, &voter)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, proposal_id, &voter)
    }

    /// Lifecycle position at the current ledger, using the live timelock
    pub fn get_proposal_status(env: Env, proposal_id: u64) -> Option<ProposalStatus> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        let config = storage::get_config(&env);
        Some(proposal.status_at(env.ledger().sequence(), config.timelock_duration))
    }

    /// Get the full governance configuration
    pub fn get_config(env: Env) -> GovernanceConfig {
        storage::get_config(&env)
    }

    pub fn get_authority_contract(env: Env) -> Option<Address> {
        storage::get_authority(&env)
    }

    pub fn get_voting_power_source(env: Env) -> Option<Address> {
        storage::get_voting_power_source(&env)
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Require that the caller may administer the ledger.
///
/// The authority address itself is always accepted; anyone else must be
/// vouched for by the authority oracle. An oracle that fails to answer is
/// treated as a refusal.
fn require_authority(env: &Env, caller: &Address) -> Result<(), VotingError> {
    let authority = storage::get_authority(env).ok_or(VotingError::NotAuthorized)?;

    caller.require_auth();

    if caller == &authority {
        return Ok(());
    }

    let oracle = AuthorityOracleClient::new(env, &authority);
    match oracle.try_is_authorized(caller) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(VotingError::NotAuthorized),
    }
}

/// Longest UTF-8 encoding of any text the ledger accepts.
const MAX_TEXT_BYTES: usize = 4 * MAX_DESCRIPTION_LEN as usize;

/// Whether `text` holds between 1 and `max_chars` characters.
///
/// `String::len` counts bytes, so the text is decoded before counting.
/// Text that is not valid UTF-8 is rejected.
fn char_len_within(text: &String, max_chars: u32) -> bool {
    let len = text.len() as usize;
    if len == 0 || len > MAX_TEXT_BYTES {
        return false;
    }

    let mut buf = [0u8; MAX_TEXT_BYTES];
    let bytes = &mut buf[..len];
    text.copy_into_slice(bytes);

    match core::str::from_utf8(bytes) {
        Ok(decoded) => decoded.chars().count() <= max_chars as usize,
        Err(_) => false,
    }
}

/// Largest amount the voter may commit right now: the configured ceiling,
/// further capped by the voting power source when one is set.
fn available_power(env: &Env, voter: &Address, now: u32) -> i128 {
    let ceiling = storage::get_config(env).total_voting_power;

    match storage::get_voting_power_source(env) {
        Some(source) => {
            let client = VotingPowerSourceClient::new(env, &source);
            match client.try_available_power(voter, &now) {
                Ok(Ok(power)) => power.min(ceiling),
                _ => 0,
            }
        }
        None => ceiling,
    }
}
