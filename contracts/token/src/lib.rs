#![no_std]
//! Governance token sold to DAO members.
//!
//! A fungible ledger with 18 decimals. Accounts acquire tokens through
//! `buy`, which mints whole tokens at the configured price; the ledger side
//! follows the standard token interface so other contracts can read
//! balances with `soroban_sdk::token::Client`.

mod ledger;
mod sale;
mod storage;
mod types;

use shared::constants::TOKEN_DECIMALS;
use shared::ContractError;
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};

pub use types::{AllowanceValue, TokenConfig};

#[contract]
pub struct GovToken;

#[contractimpl]
impl GovToken {
    /// Stores the admin, token metadata and initial price. Callable once.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        price: i128,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if price < 0 {
            return Err(ContractError::InvalidPrice);
        }

        storage::set_config(
            &env,
            &TokenConfig {
                admin: admin.clone(),
                name,
                symbol,
                price,
                payment_token: None,
            },
        );
        storage::set_total_supply(&env, 0);

        log!(&env, "token initialized", admin, price);
        env.events().publish((symbol_short!("init"), admin), price);

        Ok(())
    }

    // ── Sale ──────────────────────────────────────────────────────────────────

    /// Buys `quantity` whole tokens; returns what was charged in the payment token.
    pub fn buy(env: Env, buyer: Address, quantity: i128) -> Result<i128, ContractError> {
        buyer.require_auth();
        storage::extend_instance(&env);
        sale::buy(&env, &buyer, quantity)
    }

    /// Admin only. Later `token_price` reads return exactly `price`.
    pub fn set_price(env: Env, price: i128) -> Result<(), ContractError> {
        sale::set_price(&env, price)
    }

    /// Price of one whole token in base units of the payment token.
    pub fn token_price(env: Env) -> Result<i128, ContractError> {
        Ok(storage::get_config(&env)?.price)
    }

    /// Admin only. `None` makes `buy` free again.
    pub fn set_payment_token(
        env: Env,
        payment_token: Option<Address>,
    ) -> Result<(), ContractError> {
        sale::set_payment_token(&env, payment_token)
    }

    pub fn payment_token(env: Env) -> Result<Option<Address>, ContractError> {
        Ok(storage::get_config(&env)?.payment_token)
    }

    /// Admin only. Sends collected sale proceeds to `to`.
    pub fn withdraw(env: Env, to: Address, amount: i128) -> Result<(), ContractError> {
        sale::withdraw(&env, &to, amount)
    }

    // ── Admin ─────────────────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.admin)
    }

    /// Hands price and proceeds control to `new_admin`.
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

    // ── Token Interface ───────────────────────────────────────────────────────

    /// Balance in base units; unknown accounts hold zero.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(storage::get_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(storage::get_config(&env)?.symbol)
    }

    /// Zero once the approval's expiration ledger has passed.
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();
        storage::extend_instance(&env);
        ledger::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();
        storage::extend_instance(&env);
        ledger::transfer(&env, &from, &to, amount)
    }

    /// Moves `amount` out of `from` using the allowance granted to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        storage::extend_instance(&env);
        ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        storage::extend_instance(&env);
        ledger::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        storage::extend_instance(&env);
        ledger::burn_from(&env, &spender, &from, amount)
    }
}
