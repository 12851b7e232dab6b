#![deny(warnings)]
#![no_std]

use flash_loan_receiver_interface::types::flash_loan_params::PERCENTAGE_FACTOR;
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use pool_interface::LendingPoolTrait;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contract, contractclient, contractimpl, token, Address, Bytes, Env};
use storage::{
    read_addresses_provider, read_flash_loan_fee, read_initiator_override, read_params_override,
    read_premium_override, read_skip_receiver, write_addresses_provider, write_flash_loan_fee,
    write_initiator_override, write_params_override, write_premium_override, write_skip_receiver,
};

mod storage;

#[contractclient(name = "LendingPoolAdminClient")]
pub trait LendingPoolAdminTrait {
    fn initialize(env: Env, addresses_provider: Address, flash_loan_fee: u32);

    fn set_flash_loan_fee(env: Env, fee: u32);

    /// Makes the next flash loan report the given address as initiator,
    /// simulating a loan requested by some other contract.
    fn set_initiator_override(env: Env, initiator: Address);

    /// Makes the next flash loan quote the given premium instead of the
    /// fee-derived one.
    fn set_premium_override(env: Env, premium: i128);

    /// Makes the next flash loan pass the given bytes to the receiver in
    /// place of the borrower's params blob.
    fn set_params_override(env: Env, params: Bytes);

    /// Makes the pool keep the receiver callback uninvoked, simulating a
    /// pool that disburses funds but never calls back.
    fn set_skip_receiver(env: Env, skip: bool);
}

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn flash_loan(
        env: Env,
        who: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
    ) {
        who.require_auth();

        let token_client = token::Client::new(&env, &asset);
        let premium = read_premium_override(&env).unwrap_or_else(|| {
            amount
                .fixed_mul_floor(read_flash_loan_fee(&env) as i128, PERCENTAGE_FACTOR)
                .unwrap()
        });

        token_client.transfer(&env.current_contract_address(), &receiver, &amount);

        if read_skip_receiver(&env) {
            return;
        }

        let initiator = read_initiator_override(&env).unwrap_or(who);
        let params = read_params_override(&env).unwrap_or(params);
        let loan_received = FlashLoanReceiverClient::new(&env, &receiver).execute_operation(
            &asset, &amount, &premium, &initiator, &params,
        );
        if !loan_received {
            panic!("flash loan receiver failed");
        }

        token_client.transfer_from(
            &env.current_contract_address(),
            &receiver,
            &env.current_contract_address(),
            &(amount + premium),
        );
    }

    fn flash_loan_fee(env: Env) -> u32 {
        read_flash_loan_fee(&env)
    }

    fn addresses_provider(env: Env) -> Address {
        read_addresses_provider(&env)
    }
}

#[contractimpl]
impl LendingPoolAdminTrait for LendingPool {
    fn initialize(env: Env, addresses_provider: Address, flash_loan_fee: u32) {
        write_addresses_provider(&env, &addresses_provider);
        write_flash_loan_fee(&env, flash_loan_fee);
    }

    fn set_flash_loan_fee(env: Env, fee: u32) {
        write_flash_loan_fee(&env, fee);
    }

    fn set_initiator_override(env: Env, initiator: Address) {
        write_initiator_override(&env, &initiator);
    }

    fn set_premium_override(env: Env, premium: i128) {
        write_premium_override(&env, premium);
    }

    fn set_params_override(env: Env, params: Bytes) {
        write_params_override(&env, &params);
    }

    fn set_skip_receiver(env: Env, skip: bool) {
        write_skip_receiver(&env, skip);
    }
}
