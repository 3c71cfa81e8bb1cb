#![no_std]
//! DAO governance registry.
//!
//! Holders of the governance token create proposals, which are stored
//! under sequential indices starting at zero, and cast one yes/no vote per
//! proposal.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use shared::ContractError;

mod contract;
mod storage;
mod types;

use contract::DaoContract;
pub use types::{DaoConfig, Proposal};

#[contract]
pub struct Dao;

#[contractimpl]
impl Dao {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        DaoContract::initialize(env, admin, token)
    }

    /// Admin only.
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        DaoContract::set_admin(env, new_admin)
    }

    /// Admin only.
    pub fn set_token(env: Env, new_token: Address) -> Result<(), ContractError> {
        DaoContract::set_token(env, new_token)
    }

    pub fn create_proposal(
        env: Env,
        creator: Address,
        title: String,
        description: String,
    ) -> Result<u32, ContractError> {
        DaoContract::create_proposal(env, creator, title, description)
    }

    pub fn vote(env: Env, voter: Address, index: u32, choice: bool) -> Result<(), ContractError> {
        DaoContract::vote(env, voter, index, choice)
    }

    pub fn proposal(env: Env, index: u32) -> Result<Proposal, ContractError> {
        DaoContract::proposal(env, index)
    }

    pub fn proposal_count(env: Env) -> u32 {
        DaoContract::proposal_count(env)
    }

    pub fn has_voted(env: Env, index: u32, voter: Address) -> bool {
        DaoContract::has_voted(env, index, voter)
    }

    pub fn get_vote(env: Env, index: u32, voter: Address) -> Option<bool> {
        DaoContract::get_vote(env, index, voter)
    }

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        DaoContract::admin(env)
    }

    pub fn token(env: Env) -> Result<Address, ContractError> {
        DaoContract::token(env)
    }
}

#[cfg(test)]
mod test;
