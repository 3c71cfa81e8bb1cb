use soroban_sdk::{log, symbol_short, Address, Env};

use shared::validation::{
    safe_add, safe_sub, validate_non_negative_amount, validate_positive_amount,
    validate_sufficient_balance,
};
use shared::ContractError;

use crate::storage;
use crate::types::AllowanceValue;

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let balance = storage::get_balance(env, to);
    let supply = storage::get_total_supply(env);
    storage::set_balance(env, to, safe_add(balance, amount)?);
    storage::set_total_supply(env, safe_add(supply, amount)?);

    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);

    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    validate_non_negative_amount(amount)?;

    let balance = storage::get_balance(env, from);
    validate_sufficient_balance(balance, amount)?;

    storage::set_balance(env, from, safe_sub(balance, amount)?);
    let supply = storage::get_total_supply(env);
    storage::set_total_supply(env, safe_sub(supply, amount)?);

    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);

    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_non_negative_amount(amount)?;

    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        log!(env, "transfer rejected: insufficient balance", from_balance, amount);
        return Err(ContractError::InsufficientBalance);
    }

    if from != to {
        storage::set_balance(env, from, safe_sub(from_balance, amount)?);
        let to_balance = storage::get_balance(env, to);
        storage::set_balance(env, to, safe_add(to_balance, amount)?);
    }

    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );

    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), ContractError> {
    validate_non_negative_amount(amount)?;

    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(ContractError::AllowanceExpired);
    }

    storage::set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );

    Ok(())
}

/// Draws `amount` from the allowance `from` granted to `spender`.
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    validate_non_negative_amount(amount)?;

    let allowance = storage::get_allowance(env, from, spender);
    if allowance.amount < amount {
        log!(env, "allowance too low", allowance.amount, amount);
        return Err(ContractError::InsufficientAllowance);
    }

    if amount > 0 {
        storage::set_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }

    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    spend_allowance(env, from, spender, amount)?;
    transfer(env, from, to, amount)
}

pub fn burn_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    spend_allowance(env, from, spender, amount)?;
    burn(env, from, amount)
}
