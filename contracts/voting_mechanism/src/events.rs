use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["VotingMechanism", "AUTH_SET"])]
struct AuthoritySet {
    authority: Address,
    ledger: u32,
}

#[contractevent(topics = ["VotingMechanism", "QUORUM_UPD"])]
struct QuorumUpdated {
    old: u32,
    new: u32,
    updated_by: Address,
}

#[contractevent(topics = ["VotingMechanism", "TIMELOCK_UPD"])]
struct TimelockUpdated {
    old: u32,
    new: u32,
    updated_by: Address,
}

#[contractevent(topics = ["VotingMechanism", "POWER_UPD"])]
struct VotingPowerCeilingUpdated {
    old: i128,
    new: i128,
    updated_by: Address,
}

#[contractevent(topics = ["VotingMechanism", "SOURCE_SET"])]
struct VotingPowerSourceSet {
    source: Address,
    updated_by: Address,
}

#[contractevent(topics = ["VotingMechanism", "PROPOSED"])]
struct ProposalCreated {
    proposal_id: u64,
    creator: Address,
    title: String,
    start_time: u32,
    end_time: u32,
}

#[contractevent(topics = ["VotingMechanism", "VOTED"])]
struct VoteCast {
    proposal_id: u64,
    voter: Address,
    amount: i128,
    support: bool,
    ledger: u32,
}

#[contractevent(topics = ["VotingMechanism", "EXECUTED"])]
struct ProposalExecuted {
    proposal_id: u64,
    yes_votes: i128,
    no_votes: i128,
    ledger: u32,
}

pub fn emit_authority_set(env: &Env, authority: &Address, ledger: u32) {
    AuthoritySet {
        authority: authority.clone(),
        ledger,
    }
    .publish(env);
}

pub fn emit_quorum_updated(env: &Env, old: u32, new: u32, updated_by: &Address) {
    QuorumUpdated {
        old,
        new,
        updated_by: updated_by.clone(),
    }
    .publish(env);
}

pub fn emit_timelock_updated(env: &Env, old: u32, new: u32, updated_by: &Address) {
    TimelockUpdated {
        old,
        new,
        updated_by: updated_by.clone(),
    }
    .publish(env);
}

pub fn emit_voting_power_ceiling_updated(env: &Env, old: i128, new: i128, updated_by: &Address) {
    VotingPowerCeilingUpdated {
        old,
        new,
        updated_by: updated_by.clone(),
    }
    .publish(env);
}

pub fn emit_voting_power_source_set(env: &Env, source: &Address, updated_by: &Address) {
    VotingPowerSourceSet {
        source: source.clone(),
        updated_by: updated_by.clone(),
    }
    .publish(env);
}

pub fn emit_proposal_created(
    env: &Env,
    proposal_id: u64,
    creator: &Address,
    title: &String,
    start_time: u32,
    end_time: u32,
) {
    ProposalCreated {
        proposal_id,
        creator: creator.clone(),
        title: title.clone(),
        start_time,
        end_time,
    }
    .publish(env);
}

pub fn emit_vote_cast(
    env: &Env,
    proposal_id: u64,
    voter: &Address,
    amount: i128,
    support: bool,
    ledger: u32,
) {
    VoteCast {
        proposal_id,
        voter: voter.clone(),
        amount,
        support,
        ledger,
    }
    .publish(env);
}

pub fn emit_proposal_executed(
    env: &Env,
    proposal_id: u64,
    yes_votes: i128,
    no_votes: i128,
    ledger: u32,
) {
    ProposalExecuted {
        proposal_id,
        yes_votes,
        no_votes,
        ledger,
    }
    .publish(env);
}
