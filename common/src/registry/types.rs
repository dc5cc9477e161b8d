use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    TokenNotFound = 1,
    NotOwner = 2,
    NotApproved = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum RegistryDataKey {
    TokenCount,
    Title(u64),    // Owner and metadata per token id
    Approved(u64), // Third party allowed to move the token
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title {
    pub owner: Address,
    pub token_uri: String,
}
