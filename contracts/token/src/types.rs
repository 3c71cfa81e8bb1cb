use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address), // (from, spender)
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenConfig {
    pub admin: Address,
    pub name: String,
    pub symbol: String,
    /// Price of one whole token, in base units of the payment token.
    pub price: i128,
    /// Asset collected on `buy`; sales are free while unset.
    pub payment_token: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}
