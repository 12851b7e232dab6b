#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};

pub struct Spec;

/// Registry resolving the current lending pool address. The pool
/// implementation may change over time at the registry's discretion, so
/// dependents re-resolve instead of caching.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PoolAddressesProviderClient")]
pub trait PoolAddressesProviderTrait {
    fn get_pool(env: Env) -> Address;
}
