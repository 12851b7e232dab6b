use flash_loan_receiver_interface::types::error::Error;
use pool_addresses_provider_interface::PoolAddressesProviderClient;
use soroban_sdk::{Address, Env};

use crate::storage::read_addresses_provider;

/// Resolves the pool through the addresses provider on every call, so a
/// pool upgrade published by the registry is observed immediately.
pub fn resolve_pool(env: &Env) -> Result<Address, Error> {
    let addresses_provider = read_addresses_provider(env)?;

    Ok(PoolAddressesProviderClient::new(env, &addresses_provider).get_pool())
}
