#![deny(warnings)]
#![no_std]

use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{contractclient, contractspecfn, Address, Env};

pub struct Spec;

/// Interface for the flash loan initiator contract.
///
/// `start_flash_loan` is the caller-facing entry point of the flash loan
/// pair. Soroban forbids re-entering a contract that is already on the
/// call stack, so the contract requesting the loan cannot also be the one
/// the pool calls back into; the initiator registers the loan with the
/// receiver, directs the pool to disburse to it, and settles once the pool
/// returns. The whole borrow-callback-repay sequence either commits in one
/// transaction or reverts without a trace.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanInitiatorClient")]
pub trait FlashLoanInitiatorTrait {
    fn initialize(env: Env, addresses_provider: Address, receiver: Address) -> Result<(), Error>;

    fn start_flash_loan(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        max_premium_bps: u32,
    ) -> Result<(), Error>;

    fn addresses_provider(env: Env) -> Result<Address, Error>;

    /// Pool address as currently resolved through the addresses provider.
    fn pool(env: Env) -> Result<Address, Error>;

    /// Receiver contract loans are directed at.
    fn receiver(env: Env) -> Result<Address, Error>;

    fn version() -> u32;
}
