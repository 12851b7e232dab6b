#![deny(warnings)]
#![no_std]

use pool_addresses_provider_interface::PoolAddressesProviderTrait;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};
use storage::{read_pool, write_pool};

mod storage;

#[contractclient(name = "PoolAddressesProviderAdminClient")]
pub trait PoolAddressesProviderAdminTrait {
    fn initialize(env: Env, pool: Address);

    /// Repoints the registry at a new pool implementation, as the real
    /// registry does on upgrades.
    fn set_pool(env: Env, pool: Address);
}

#[contract]
pub struct PoolAddressesProvider;

#[contractimpl]
impl PoolAddressesProviderTrait for PoolAddressesProvider {
    fn get_pool(env: Env) -> Address {
        read_pool(&env)
    }
}

#[contractimpl]
impl PoolAddressesProviderAdminTrait for PoolAddressesProvider {
    fn initialize(env: Env, pool: Address) {
        write_pool(&env, &pool);
    }

    fn set_pool(env: Env, pool: Address) {
        write_pool(&env, &pool);
    }
}
