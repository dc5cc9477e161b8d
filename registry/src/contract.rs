use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::{
    events::RegistryEvent,
    storage::{
        clear_approved, has_title, next_token_id, read_approved, read_title, token_count,
        write_approved, write_title,
    },
};
use common::registry::{
    interface::TitleRegistryInterface,
    types::{RegistryError as Error, Title},
};

const NAME: &str = "Tokenized Property Title";
const SYMBOL: &str = "TITLE";

#[contract]
pub struct TitleRegistryContract;

#[contractimpl]
impl TitleRegistryInterface for TitleRegistryContract {
    fn version() -> u32 {
        1
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn total_supply(env: Env) -> u64 {
        token_count(&env)
    }

    // Anyone may register a title to themselves; ids are sequential from 1
    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        to.require_auth();

        let token_id: u64 = next_token_id(&env);
        write_title(
            &env,
            token_id,
            &Title {
                owner: to.clone(),
                token_uri,
            },
        );

        RegistryEvent::Mint(token_id, to).publish(&env);
        token_id
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_title(&env, token_id)
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        Ok(read_title(&env, token_id)?.owner)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        Ok(read_title(&env, token_id)?.token_uri)
    }

    fn approve(env: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let title: Title = read_title(&env, token_id)?;
        if title.owner != owner {
            return Err(Error::NotOwner);
        }

        write_approved(&env, token_id, &spender);
        RegistryEvent::Approval(token_id, owner, spender).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        read_approved(&env, token_id)
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let title: Title = read_title(&env, token_id)?;
        if title.owner != from {
            return Err(Error::NotOwner);
        }

        move_title(&env, title, from, to, token_id);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let title: Title = read_title(&env, token_id)?;
        if title.owner != from {
            return Err(Error::NotOwner);
        }

        // The owner itself or the single approved address may move the title
        let approved: bool = read_approved(&env, token_id).is_some_and(|a| a == spender);
        if spender != from && !approved {
            return Err(Error::NotApproved);
        }

        move_title(&env, title, from, to, token_id);
        Ok(())
    }
}

fn move_title(env: &Env, mut title: Title, from: Address, to: Address, token_id: u64) {
    title.owner = to.clone();
    write_title(env, token_id, &title);
    // An approval never survives a change of owner
    clear_approved(env, token_id);
    RegistryEvent::Transfer(token_id, from, to).publish(env);
}
