#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

/// Consumed surface of the external lending pool.
///
/// `flash_loan` transfers `amount` of `asset` to `receiver`, invokes the
/// receiver's `execute_operation` with `who` as initiator, the
/// pool-determined premium and the pass-through `params` blob, and pulls
/// `amount + premium` back from the receiver's allowance before returning.
/// `who` must authorize the call. Any failure along the way aborts the
/// whole invocation tree.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    fn flash_loan(
        env: Env,
        who: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
    );

    /// Current flash loan fee in basis points.
    fn flash_loan_fee(env: Env) -> u32;

    fn addresses_provider(env: Env) -> Address;
}
