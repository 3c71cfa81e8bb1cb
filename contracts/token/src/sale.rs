use soroban_sdk::{log, symbol_short, token, Address, Env};

use shared::validation::{safe_mul, to_base_units, validate_positive_amount};
use shared::ContractError;

use crate::ledger;
use crate::storage;

/// Sells `quantity` whole tokens to `buyer`.
///
/// Mints `quantity * 10^18` base units. When a payment token is configured
/// the buyer pays `quantity * price` of it to this contract; otherwise the
/// sale does not charge anything.
///
/// Returns the amount charged in the payment token.
pub fn buy(env: &Env, buyer: &Address, quantity: i128) -> Result<i128, ContractError> {
    if let Err(err) = validate_positive_amount(quantity) {
        log!(env, "buy rejected: quantity must be positive", quantity);
        return Err(err);
    }

    let config = storage::get_config(env)?;
    let minted = to_base_units(quantity)?;

    let cost = match &config.payment_token {
        Some(payment_token) => {
            let cost = safe_mul(quantity, config.price)?;
            if cost > 0 {
                let payment_client = token::Client::new(env, payment_token);
                payment_client.transfer(buyer, &env.current_contract_address(), &cost);
            }
            cost
        }
        None => 0,
    };

    ledger::mint(env, buyer, minted)?;

    env.events().publish(
        (symbol_short!("buy"), buyer.clone()),
        (quantity, minted, cost),
    );

    Ok(cost)
}

pub fn set_price(env: &Env, price: i128) -> Result<(), ContractError> {
    let mut config = storage::get_config(env)?;
    config.admin.require_auth();

    if price < 0 {
        log!(env, "set_price rejected: negative price", price);
        return Err(ContractError::InvalidPrice);
    }

    let old_price = config.price;
    config.price = price;
    storage::set_config(env, &config);

    env.events().publish(
        (symbol_short!("price"), config.admin.clone()),
        (old_price, price),
    );

    Ok(())
}

pub fn set_payment_token(env: &Env, payment_token: Option<Address>) -> Result<(), ContractError> {
    let mut config = storage::get_config(env)?;
    config.admin.require_auth();

    config.payment_token = payment_token.clone();
    storage::set_config(env, &config);

    log!(env, "payment token updated");
    env.events()
        .publish((symbol_short!("pay_token"), config.admin), payment_token);

    Ok(())
}

/// Moves collected sale proceeds out of the contract.
pub fn withdraw(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    let config = storage::get_config(env)?;
    config.admin.require_auth();
    validate_positive_amount(amount)?;

    let payment_token = config.payment_token.ok_or(ContractError::NotFound)?;
    let payment_client = token::Client::new(env, &payment_token);

    let proceeds = payment_client.balance(&env.current_contract_address());
    if proceeds < amount {
        log!(env, "withdraw rejected: proceeds too low", proceeds, amount);
        return Err(ContractError::InsufficientBalance);
    }

    payment_client.transfer(&env.current_contract_address(), to, &amount);

    env.events()
        .publish((symbol_short!("withdraw"), to.clone()), amount);

    Ok(())
}
