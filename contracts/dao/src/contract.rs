use soroban_sdk::{log, symbol_short, token, Address, Env, String};

use shared::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use shared::validation::validate_text;
use shared::ContractError;

use crate::storage;
use crate::types::{DaoConfig, Proposal};

pub struct DaoContract;

impl DaoContract {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_config(
            &env,
            &DaoConfig {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        storage::set_proposal_count(&env, 0);

        env.events().publish((symbol_short!("init"), admin), token);

        Ok(())
    }

    // -------------------------------
    // Administration
    // -------------------------------
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();

        let old_admin = config.admin.clone();
        config.admin = new_admin.clone();
        storage::set_config(&env, &config);

        env.events()
            .publish((symbol_short!("set_admin"), old_admin), new_admin);

        Ok(())
    }

    /// Points eligibility checks at another governance token. Existing
    /// proposals and recorded votes are kept.
    pub fn set_token(env: Env, new_token: Address) -> Result<(), ContractError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();

        config.token = new_token.clone();
        storage::set_config(&env, &config);

        log!(&env, "governance token updated", new_token.clone());
        env.events()
            .publish((symbol_short!("set_token"), config.admin), new_token);

        Ok(())
    }

    // -------------------------------
    // Proposal Creation
    // -------------------------------
    pub fn create_proposal(
        env: Env,
        creator: Address,
        title: String,
        description: String,
    ) -> Result<u32, ContractError> {
        creator.require_auth();

        if title.len() == 0 {
            return Err(ContractError::EmptyTitle);
        }
        validate_text(&title, MAX_TITLE_LEN)?;
        validate_text(&description, MAX_DESCRIPTION_LEN)?;

        let config = storage::get_config(&env)?;
        Self::require_eligible(&env, &config, &creator)?;

        let index = storage::get_proposal_count(&env);
        let next = index.checked_add(1).ok_or(ContractError::Overflow)?;

        let proposal = Proposal {
            creator: creator.clone(),
            title,
            description,
            yes: 0,
            no: 0,
        };

        storage::set_proposal(&env, index, &proposal);
        storage::set_proposal_count(&env, next);
        storage::extend_instance(&env);

        env.events()
            .publish((symbol_short!("proposal"), creator), index);

        Ok(index)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(env: Env, voter: Address, index: u32, choice: bool) -> Result<(), ContractError> {
        voter.require_auth();

        let config = storage::get_config(&env)?;
        let mut proposal = storage::get_proposal(&env, index)?;

        Self::require_eligible(&env, &config, &voter)?;

        if storage::get_vote(&env, index, &voter).is_some() {
            log!(&env, "vote rejected: already voted", voter, index);
            return Err(ContractError::AlreadyVoted);
        }

        if choice {
            proposal.yes = proposal.yes.checked_add(1).ok_or(ContractError::Overflow)?;
        } else {
            proposal.no = proposal.no.checked_add(1).ok_or(ContractError::Overflow)?;
        }

        storage::set_vote(&env, index, &voter, choice);
        storage::set_proposal(&env, index, &proposal);
        storage::extend_instance(&env);

        env.events()
            .publish((symbol_short!("vote"), voter), (index, choice));

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn proposal(env: Env, index: u32) -> Result<Proposal, ContractError> {
        storage::get_proposal(&env, index)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn has_voted(env: Env, index: u32, voter: Address) -> bool {
        storage::get_vote(&env, index, &voter).is_some()
    }

    pub fn get_vote(env: Env, index: u32, voter: Address) -> Option<bool> {
        storage::get_vote(&env, index, &voter)
    }

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.admin)
    }

    pub fn token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.token)
    }

    /// Holding one whole governance token (10^decimals base units) is
    /// required to propose and to vote.
    ///
    /// The balance is read at call time, not snapshotted per proposal, so a
    /// token moved to a fresh address can vote again from there. Votes are
    /// one per address, not one per token.
    fn require_eligible(env: &Env, config: &DaoConfig, who: &Address) -> Result<(), ContractError> {
        let token_client = token::Client::new(env, &config.token);
        let threshold = 10i128
            .checked_pow(token_client.decimals())
            .ok_or(ContractError::Overflow)?;

        let balance = token_client.balance(who);
        if balance < threshold {
            log!(env, "not eligible: balance below one token", who.clone(), balance);
            return Err(ContractError::NotEligible);
        }

        Ok(())
    }
}
