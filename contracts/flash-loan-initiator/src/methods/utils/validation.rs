use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Env};

use crate::storage::has_addresses_provider;

pub fn require_addresses_provider_not_exist(env: &Env) {
    if has_addresses_provider(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}
