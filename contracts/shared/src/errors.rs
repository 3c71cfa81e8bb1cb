//! Common error types for the governance contracts
//!
//! Both contracts return this enum so that clients see one stable set of
//! error codes.

use soroban_sdk::contracterror;

/// Error codes shared by the token and DAO contracts
///
/// Error ranges are organized by category:
/// - 1-19: General errors
/// - 20-39: Token ledger errors
/// - 40-59: Governance errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ===== General Errors (1-19) =====
    /// Requested resource not found
    NotFound = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Arithmetic overflow occurred
    Overflow = 4,

    /// Operation would cause underflow
    Underflow = 5,

    // ===== Token Errors (20-39) =====
    /// Amount is zero, negative, or otherwise unusable
    InvalidAmount = 20,

    /// Price is negative
    InvalidPrice = 21,

    /// Account balance is lower than the requested amount
    InsufficientBalance = 22,

    /// Spender allowance is lower than the requested amount
    InsufficientAllowance = 23,

    /// Allowance expiration ledger is already in the past
    AllowanceExpired = 24,

    // ===== Governance Errors (40-59) =====
    /// Proposal not found
    ProposalNotFound = 40,

    /// Caller does not hold enough governance tokens
    NotEligible = 41,

    /// Voter already voted on this proposal
    AlreadyVoted = 42,

    /// Proposal title is empty
    EmptyTitle = 43,

    /// Proposal title or description exceeds its length limit
    TextTooLong = 44,
}

impl ContractError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            ContractError::NotFound => "Resource not found",
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",
            ContractError::Overflow => "Arithmetic overflow",
            ContractError::Underflow => "Arithmetic underflow",
            ContractError::InvalidAmount => "Invalid amount",
            ContractError::InvalidPrice => "Price must not be negative",
            ContractError::InsufficientBalance => "Insufficient balance",
            ContractError::InsufficientAllowance => "Insufficient allowance",
            ContractError::AllowanceExpired => "Allowance expiration is in the past",
            ContractError::ProposalNotFound => "Proposal not found",
            ContractError::NotEligible => "Caller does not hold a whole governance token",
            ContractError::AlreadyVoted => "Already voted on this proposal",
            ContractError::EmptyTitle => "Proposal title is empty",
            ContractError::TextTooLong => "Proposal text is too long",
        }
    }
}
