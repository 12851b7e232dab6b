use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::storage::{has_pending_loan, read_initiator};

pub fn settle_loan(env: &Env, asset: &Address, to: &Address) -> Result<i128, Error> {
    read_initiator(env)?.require_auth();

    // The callback consumes the registered record; a pool that kept the
    // funds without calling back is broken or hostile.
    assert_with_error!(env, !has_pending_loan(env), Error::LoanNotSettled);

    let token_client = token::Client::new(env, asset);
    let residual = token_client.balance(&env.current_contract_address());
    if residual > 0 {
        token_client.transfer(&env.current_contract_address(), to, &residual);
    }

    Ok(residual)
}
