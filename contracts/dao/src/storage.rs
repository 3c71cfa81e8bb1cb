use soroban_sdk::{contracttype, Address, Env};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::ContractError;

use crate::types::{DaoConfig, Proposal};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ProposalCount,
    Proposal(u32),
    Vote(u32, Address), // (proposal index, voter)
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<DaoConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &DaoConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, index: u32) -> Result<Proposal, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(index))
        .ok_or(ContractError::ProposalNotFound)
}

pub fn set_proposal(env: &Env, index: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(index);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_vote(env: &Env, index: u32, voter: &Address) -> Option<bool> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(index, voter.clone()))
}

pub fn set_vote(env: &Env, index: u32, voter: &Address, choice: bool) {
    let key = DataKey::Vote(index, voter.clone());
    env.storage().persistent().set(&key, &choice);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
