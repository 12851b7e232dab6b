#![deny(warnings)]
#![no_std]

use flash_loan_receiver_interface::types::error::Error;
use flash_loan_receiver_interface::FlashLoanReceiverTrait;
use methods::{
    execute_operation::execute_operation, initialize::initialize, register_loan::register_loan,
    settle_loan::settle_loan, utils::resolve_pool::resolve_pool,
};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

use crate::storage::{read_addresses_provider, read_initiator};

mod event;
mod methods;
mod storage;
mod types;

#[contract]
pub struct FlashLoanReceiver;

#[contractimpl]
impl FlashLoanReceiverTrait for FlashLoanReceiver {
    fn initialize(env: Env, addresses_provider: Address, initiator: Address) -> Result<(), Error> {
        initialize(&env, &addresses_provider, &initiator)
    }

    fn register_loan(env: Env, asset: Address, amount: i128) -> Result<(), Error> {
        register_loan(&env, &asset, amount)
    }

    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> Result<bool, Error> {
        execute_operation(&env, &asset, amount, premium, &initiator, &params)
    }

    fn settle_loan(env: Env, asset: Address, to: Address) -> Result<i128, Error> {
        settle_loan(&env, &asset, &to)
    }

    fn addresses_provider(env: Env) -> Result<Address, Error> {
        read_addresses_provider(&env)
    }

    fn pool(env: Env) -> Result<Address, Error> {
        resolve_pool(&env)
    }

    fn initiator(env: Env) -> Result<Address, Error> {
        read_initiator(&env)
    }

    fn version() -> u32 {
        1
    }
}
