use flash_loan_receiver_interface::types::error::Error;
use flash_loan_receiver_interface::types::flash_loan_params::{FlashLoanParams, PERCENTAGE_FACTOR};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{assert_with_error, token, Address, Bytes, Env};

use crate::event;
use crate::storage::{read_initiator, read_pending_loan, remove_pending_loan};

use super::utils::resolve_pool::resolve_pool;
use super::utils::validation::require_non_negative_premium;

/// Ledgers the repayment allowance stays live. The pool consumes it
/// before the enclosing transaction ends.
const ALLOWANCE_LIVE_LEDGERS: u32 = 20;

pub fn execute_operation(
    env: &Env,
    asset: &Address,
    amount: i128,
    premium: i128,
    initiator: &Address,
    params: &Bytes,
) -> Result<bool, Error> {
    let pool = resolve_pool(env)?;
    pool.require_auth();

    // Single-shot: the record registered by the initiator is consumed here,
    // so a second callback in the same transaction, a callback for a loan
    // the initiator never requested, or a replay after settlement all fail.
    let pending = read_pending_loan(env).ok_or(Error::UnauthorizedCaller)?;
    remove_pending_loan(env);
    assert_with_error!(
        env,
        pending.asset == *asset && pending.amount == amount,
        Error::UnauthorizedCaller
    );

    assert_with_error!(
        env,
        *initiator == read_initiator(env)?,
        Error::UntrustedInitiator
    );

    let loan_params =
        FlashLoanParams::from_xdr(env, params).map_err(|_| Error::InvalidLoanParams)?;
    require_non_negative_premium(env, premium);
    let max_premium = amount
        .fixed_mul_floor(loan_params.max_premium_bps as i128, PERCENTAGE_FACTOR)
        .ok_or(Error::MathOverflowError)?;
    assert_with_error!(env, premium <= max_premium, Error::PremiumTooHigh);

    let repayment = amount.checked_add(premium).ok_or(Error::MathOverflowError)?;

    let contract = env.current_contract_address();
    let token_client = token::Client::new(env, asset);
    assert_with_error!(
        env,
        token_client.balance(&contract) >= repayment,
        Error::InsufficientRepaymentFunds
    );

    let live_until = env.ledger().sequence() + ALLOWANCE_LIVE_LEDGERS;
    if token_client
        .try_approve(&contract, &pool, &repayment, &live_until)
        .is_err()
    {
        return Err(Error::AssetTransferFailed);
    }

    event::repayment(env, asset, amount, premium);

    Ok(true)
}
