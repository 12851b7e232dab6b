use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_addresses_provider, write_receiver};

use super::utils::validation::require_addresses_provider_not_exist;

pub fn initialize(env: &Env, addresses_provider: &Address, receiver: &Address) -> Result<(), Error> {
    require_addresses_provider_not_exist(env);

    write_addresses_provider(env, addresses_provider);
    write_receiver(env, receiver);

    event::initialized(env, addresses_provider, receiver);

    Ok(())
}
