use common::{
    escrow::types::{EscrowError as Error, Listing, PAYMENT_TOKEN, REGISTRY_CONTRACT},
    registry::interface::TitleRegistryClient,
};
use soroban_sdk::{token, Address, Env};

use crate::storage::get_party;

pub fn get_registry_client(env: &Env) -> Result<TitleRegistryClient<'_>, Error> {
    let registry_ca: Address = get_party(env, &REGISTRY_CONTRACT)?;
    Ok(TitleRegistryClient::new(env, &registry_ca))
}

pub fn get_token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token_addr: Address = get_party(env, &PAYMENT_TOKEN)?;
    Ok(token::Client::new(env, &token_addr))
}

pub fn require_role(caller: &Address, role: &Address) -> Result<(), Error> {
    if caller != role {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Moves `amount` of the payment token from `from` into the coordinator.
pub fn pull_funds(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token_client: token::Client<'_> = get_token_client(env)?;
    if token_client.balance(from) < amount {
        return Err(Error::InsufficientFunds);
    }
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

pub fn release_funds(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    get_token_client(env)?.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

/// Records a deposit against the listing's custodial balance and the
/// contributor's running total.
pub fn credit(listing: &mut Listing, from: &Address, amount: i128) -> Result<(), Error> {
    listing.balance = listing
        .balance
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    let contributed: i128 = listing
        .contribution_of(from)
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    listing.contributions.set(from.clone(), contributed);
    Ok(())
}

/// Makes the coordinator the registry owner of `asset_id`.
/// A title already held is accepted as is, otherwise it is pulled from the
/// seller through the seller's prior approval.
pub fn take_custody(env: &Env, seller: &Address, asset_id: u64) -> Result<(), Error> {
    let registry: TitleRegistryClient<'_> = get_registry_client(env)?;
    let this: Address = env.current_contract_address();

    if held_by(&registry, asset_id, &this) {
        return Ok(());
    }

    if registry
        .try_transfer_from(&this, seller, &this, &asset_id)
        .is_err()
    {
        return Err(Error::AssetNotInCustody);
    }

    if !held_by(&registry, asset_id, &this) {
        return Err(Error::AssetNotInCustody);
    }
    Ok(())
}

pub fn release_asset(env: &Env, to: &Address, asset_id: u64) -> Result<(), Error> {
    get_registry_client(env)?.transfer(&env.current_contract_address(), to, &asset_id);
    Ok(())
}

fn held_by(registry: &TitleRegistryClient<'_>, asset_id: u64, holder: &Address) -> bool {
    matches!(registry.try_owner_of(&asset_id), Ok(Ok(owner)) if owner == *holder)
}
