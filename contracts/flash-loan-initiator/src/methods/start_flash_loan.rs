use flash_loan_receiver_interface::types::error::Error;
use flash_loan_receiver_interface::types::flash_loan_params::FlashLoanParams;
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use pool_interface::LendingPoolClient;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::read_receiver;

use super::utils::resolve_pool::resolve_pool;
use super::utils::validation::require_positive_amount;

pub fn start_flash_loan(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    max_premium_bps: u32,
) -> Result<(), Error> {
    who.require_auth();
    require_positive_amount(env, amount);

    let pool = resolve_pool(env)?;
    let receiver = read_receiver(env)?;
    let receiver_client = FlashLoanReceiverClient::new(env, &receiver);

    receiver_client.register_loan(asset, &amount);

    let params = FlashLoanParams { max_premium_bps }.to_xdr(env);
    LendingPoolClient::new(env, &pool).flash_loan(
        &env.current_contract_address(),
        &receiver,
        asset,
        &amount,
        &params,
    );

    // Settlement fails if the pool returned without invoking the callback;
    // any residual balance flows back to the borrower.
    let residual = receiver_client.settle_loan(asset, who);

    event::flash_loan(env, who, asset, amount, residual);

    Ok(())
}
