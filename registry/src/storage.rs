use common::registry::types::{RegistryDataKey as DataKey, RegistryError as Error, Title};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
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

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_persistent(env, key);
}

pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

// TOKENS
pub fn token_count(env: &Env) -> u64 {
    get_data(env, &DataKey::TokenCount).unwrap_or(0)
}

pub fn next_token_id(env: &Env) -> u64 {
    let token_id: u64 = token_count(env) + 1;
    store_data(env, &DataKey::TokenCount, &token_id);
    token_id
}

pub fn read_title(env: &Env, token_id: u64) -> Result<Title, Error> {
    get_persistent(env, &DataKey::Title(token_id)).ok_or(Error::TokenNotFound)
}

pub fn write_title(env: &Env, token_id: u64, title: &Title) {
    store_persistent(env, &DataKey::Title(token_id), title);
}

pub fn has_title(env: &Env, token_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Title(token_id))
}

pub fn read_approved(env: &Env, token_id: u64) -> Option<Address> {
    get_persistent(env, &DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: u64, spender: &Address) {
    store_persistent(env, &DataKey::Approved(token_id), spender);
}

pub fn clear_approved(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::Approved(token_id));
}
