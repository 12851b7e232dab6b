use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_addresses_provider, write_initiator};

use super::utils::validation::require_addresses_provider_not_exist;

pub fn initialize(
    env: &Env,
    addresses_provider: &Address,
    initiator: &Address,
) -> Result<(), Error> {
    require_addresses_provider_not_exist(env);

    write_addresses_provider(env, addresses_provider);
    write_initiator(env, initiator);

    event::initialized(env, addresses_provider, initiator);

    Ok(())
}
