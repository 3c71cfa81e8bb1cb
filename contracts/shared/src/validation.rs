//! Validation helper utilities for the governance contracts

use crate::constants::TOKEN_UNIT;
use crate::errors::ContractError;
use soroban_sdk::String;

// ===== Amount Validation =====

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Validate that an amount is non-negative
pub fn validate_non_negative_amount(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Validate that a balance covers the required amount
pub fn validate_sufficient_balance(balance: i128, required: i128) -> Result<(), ContractError> {
    if balance < required {
        return Err(ContractError::InsufficientBalance);
    }
    Ok(())
}

// ===== Text Validation =====

/// Validate a byte length limit on a contract string
///
/// Empty strings are accepted; callers that need a non-empty value check
/// for it themselves.
pub fn validate_text(text: &String, max_len: u32) -> Result<(), ContractError> {
    if text.len() > max_len {
        return Err(ContractError::TextTooLong);
    }
    Ok(())
}

// ===== Safe Math =====

/// Safe addition with overflow check
pub fn safe_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Safe multiplication with overflow check
pub fn safe_mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Convert a whole-token quantity into base units
pub fn to_base_units(quantity: i128) -> Result<i128, ContractError> {
    safe_mul(quantity, TOKEN_UNIT)
}
