#![no_std]
//! # Shared Governance Contracts Library
//!
//! Reusable errors, constants, and validation helpers for the governance
//! token and DAO contracts.
//!
//! ## Modules
//!
//! - `errors` - The error enum returned by every contract entry point
//! - `constants` - Token scale, text limits, and storage TTL settings
//! - `validation` - Amount, text, and checked-arithmetic helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::constants::TOKEN_UNIT;
//! use shared::validation::{safe_add, validate_positive_amount};
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::ContractError;
pub use validation::{
    safe_add, safe_mul, safe_sub, to_base_units, validate_non_negative_amount,
    validate_positive_amount, validate_text,
};
