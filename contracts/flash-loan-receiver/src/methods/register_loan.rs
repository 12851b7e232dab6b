use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_initiator, write_pending_loan};
use crate::types::pending_loan::PendingLoan;

pub fn register_loan(env: &Env, asset: &Address, amount: i128) -> Result<(), Error> {
    read_initiator(env)?.require_auth();

    write_pending_loan(
        env,
        &PendingLoan {
            asset: asset.clone(),
            amount,
        },
    );

    Ok(())
}
