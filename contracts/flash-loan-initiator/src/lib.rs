#![deny(warnings)]
#![no_std]

use flash_loan_initiator_interface::FlashLoanInitiatorTrait;
use flash_loan_receiver_interface::types::error::Error;
use methods::{
    initialize::initialize, start_flash_loan::start_flash_loan,
    utils::resolve_pool::resolve_pool,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::{read_addresses_provider, read_receiver};

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct FlashLoanInitiator;

#[contractimpl]
impl FlashLoanInitiatorTrait for FlashLoanInitiator {
    fn initialize(env: Env, addresses_provider: Address, receiver: Address) -> Result<(), Error> {
        initialize(&env, &addresses_provider, &receiver)
    }

    fn start_flash_loan(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        max_premium_bps: u32,
    ) -> Result<(), Error> {
        start_flash_loan(&env, &who, &asset, amount, max_premium_bps)
    }

    fn addresses_provider(env: Env) -> Result<Address, Error> {
        read_addresses_provider(&env)
    }

    fn pool(env: Env) -> Result<Address, Error> {
        resolve_pool(&env)
    }

    fn receiver(env: Env) -> Result<Address, Error> {
        read_receiver(&env)
    }

    fn version() -> u32 {
        1
    }
}
