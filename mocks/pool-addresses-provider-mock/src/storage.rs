use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Pool,
}

pub fn write_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn read_pool(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Pool).unwrap()
}
