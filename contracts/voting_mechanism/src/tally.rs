//! Quorum and majority checks over voting-power tallies.
//!
//! Both checks compare cross-multiplied integers instead of computing a
//! percentage, so results never depend on rounding.

use crate::error::VotingError;
use crate::types::MAJORITY_PERCENT;

/// Outcome of tallying a proposal at execution time
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TallyOutcome {
    QuorumNotMet,
    MajorityNotMet,
    Passed,
}

/// `total_votes * 100 >= quorum_threshold * total_voting_power`.
///
/// Zero participation never meets quorum, whatever the threshold.
pub fn quorum_met(
    total_votes: i128,
    quorum_threshold: u32,
    total_voting_power: i128,
) -> Result<bool, VotingError> {
    if total_votes <= 0 {
        return Ok(false);
    }
    let participation = total_votes
        .checked_mul(100)
        .ok_or(VotingError::ArithmeticOverflow)?;
    let required = total_voting_power
        .checked_mul(i128::from(quorum_threshold))
        .ok_or(VotingError::ArithmeticOverflow)?;
    Ok(participation >= required)
}

/// `yes_votes * 100 >= 51 * total_votes`
pub fn majority_met(yes_votes: i128, total_votes: i128) -> Result<bool, VotingError> {
    if total_votes <= 0 {
        return Ok(false);
    }
    let yes = yes_votes
        .checked_mul(100)
        .ok_or(VotingError::ArithmeticOverflow)?;
    let required = total_votes
        .checked_mul(MAJORITY_PERCENT)
        .ok_or(VotingError::ArithmeticOverflow)?;
    Ok(yes >= required)
}

pub fn evaluate(
    yes_votes: i128,
    no_votes: i128,
    quorum_threshold: u32,
    total_voting_power: i128,
) -> Result<TallyOutcome, VotingError> {
    let total_votes = yes_votes
        .checked_add(no_votes)
        .ok_or(VotingError::ArithmeticOverflow)?;

    if !quorum_met(total_votes, quorum_threshold, total_voting_power)? {
        return Ok(TallyOutcome::QuorumNotMet);
    }
    if !majority_met(yes_votes, total_votes)? {
        return Ok(TallyOutcome::MajorityNotMet);
    }
    Ok(TallyOutcome::Passed)
}
