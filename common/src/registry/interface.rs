use soroban_sdk::{contractclient, Address, Env, String};
use super::types::RegistryError as Error;

#[contractclient(name = "TitleRegistryClient")]
pub trait TitleRegistryInterface {
    fn version() -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn total_supply(env: Env) -> u64;
    fn mint(env: Env, to: Address, token_uri: String) -> u64;
    fn exists(env: Env, token_id: u64) -> bool;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn approve(env: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
}
