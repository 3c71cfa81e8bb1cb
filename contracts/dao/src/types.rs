use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DaoConfig {
    pub admin: Address,
    /// Governance token whose holders may propose and vote.
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub yes: u32,
    pub no: u32,
}
