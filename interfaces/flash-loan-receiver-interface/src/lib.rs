#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for the flash loan receiver contract.
///
/// The receiver is the pool-facing half of the flash loan pair: the
/// initiator contract registers the loan it is about to request, the pool
/// invokes `execute_operation` with the borrowed funds already on the
/// receiver's balance, and the initiator settles once the pool returns.
/// `execute_operation` must leave the pool an allowance of exactly
/// `amount + premium` before returning `true`.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiverTrait {
    fn initialize(env: Env, addresses_provider: Address, initiator: Address) -> Result<(), Error>;

    /// Records the loan the initiator is about to request from the pool.
    /// The record is consumed by `execute_operation`, so a callback with
    /// no matching record is rejected.
    fn register_loan(env: Env, asset: Address, amount: i128) -> Result<(), Error>;

    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> Result<bool, Error>;

    /// Verifies the registered loan was settled by the pool callback and
    /// transfers any residual `asset` balance to `to`. Returns the swept
    /// amount.
    fn settle_loan(env: Env, asset: Address, to: Address) -> Result<i128, Error>;

    fn addresses_provider(env: Env) -> Result<Address, Error>;

    /// Pool address as currently resolved through the addresses provider.
    fn pool(env: Env) -> Result<Address, Error>;

    /// Initiator contract trusted to direct loans at this receiver.
    fn initiator(env: Env) -> Result<Address, Error>;

    fn version() -> u32;
}
