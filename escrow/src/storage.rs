use common::escrow::types::{EscrowDataKey as DataKey, EscrowError as Error, Listing};
use soroban_sdk::{Address, Env, IntoVal, Symbol, TryFromVal, Val};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}

/// Reads one of the role addresses written at initialization.
pub fn get_party(env: &Env, key: &Symbol) -> Result<Address, Error> {
    get_data(env, key).ok_or(Error::NotInitialized)
}

// LISTINGS
pub fn get_listing(env: &Env, asset_id: u64) -> Option<Listing> {
    env.storage().persistent().get(&DataKey::Listing(asset_id))
}

pub fn store_listing(env: &Env, listing: &Listing) {
    let key = DataKey::Listing(listing.asset_id);
    let max_ttl: u32 = env.storage().max_ttl();

    env.storage().persistent().set(&key, listing);
    env.storage()
        .persistent()
        .extend_ttl(&key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
    extend_instance(env);
}

/// Looks up a listing that may still be mutated.
pub fn get_open_listing(env: &Env, asset_id: u64) -> Result<Listing, Error> {
    let listing: Listing = get_listing(env, asset_id).ok_or(Error::NotListed)?;
    if !listing.is_listed() {
        return Err(Error::AlreadySettled);
    }
    Ok(listing)
}
