extern crate std;

use crate::tests::sut::{init_system, FLASH_LOAN_FEE_BPS, POOL_LIQUIDITY};
use crate::*;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events};
use soroban_sdk::{vec, IntoVal, Symbol};

const AMOUNT: i128 = 1_000_000_000;
const PREMIUM: i128 = AMOUNT * FLASH_LOAN_FEE_BPS as i128 / 10_000;
const MAX_PREMIUM_BPS: u32 = 1_000;

#[test]
fn should_borrow_and_repay_in_one_transaction() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.token_admin.mint(&borrower, &PREMIUM);
    sut.token.transfer(&borrower, &sut.receiver.address, &PREMIUM);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);

    assert_eq!(sut.token.balance(&borrower), 0);
    assert_eq!(sut.token.balance(&sut.receiver.address), 0);
    assert_eq!(sut.token.balance(&sut.initiator.address), 0);
    assert_eq!(
        sut.token.balance(&sut.pool.address),
        POOL_LIQUIDITY + PREMIUM
    );
    assert_eq!(
        sut.token.allowance(&sut.receiver.address, &sut.pool.address),
        0
    );
}

#[test]
fn should_sweep_residual_to_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);
    let prefund = PREMIUM + 100_000;

    sut.token_admin.mint(&borrower, &prefund);
    sut.token.transfer(&borrower, &sut.receiver.address, &prefund);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);

    assert_eq!(sut.token.balance(&borrower), 100_000);
    assert_eq!(sut.token.balance(&sut.receiver.address), 0);
    assert_eq!(
        sut.token.balance(&sut.pool.address),
        POOL_LIQUIDITY + PREMIUM
    );
}

#[test]
fn should_accept_premium_at_exact_bound() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.token_admin.mint(&borrower, &PREMIUM);
    sut.token.transfer(&borrower, &sut.receiver.address, &PREMIUM);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &FLASH_LOAN_FEE_BPS);

    assert_eq!(
        sut.token.balance(&sut.pool.address),
        POOL_LIQUIDITY + PREMIUM
    );
}

#[test]
fn should_accept_zero_premium() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.pool_admin.set_flash_loan_fee(&0);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &0);

    assert_eq!(sut.token.balance(&borrower), 0);
    assert_eq!(sut.token.balance(&sut.pool.address), POOL_LIQUIDITY);
}

#[test]
fn should_emit_flash_loan_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.token_admin.mint(&borrower, &PREMIUM);
    sut.token.transfer(&borrower, &sut.receiver.address, &PREMIUM);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.initiator.address.clone(),
                (
                    Symbol::new(&env, "flash_loan"),
                    borrower.clone(),
                    sut.token.address.clone()
                )
                    .into_val(&env),
                (AMOUNT, 0_i128).into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_require_caller_authorization() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.token_admin.mint(&borrower, &PREMIUM);
    sut.token.transfer(&borrower, &sut.receiver.address, &PREMIUM);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);

    assert_eq!(
        env.auths()[0],
        (
            borrower.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.initiator.address.clone(),
                    Symbol::new(&env, "start_flash_loan"),
                    vec![
                        &env,
                        borrower.into_val(&env),
                        sut.token.address.into_val(&env),
                        AMOUNT.into_val(&env),
                        MAX_PREMIUM_BPS.into_val(&env),
                    ],
                )),
                sub_invocations: std::vec![],
            }
        )
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_fail_when_amount_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &0, &MAX_PREMIUM_BPS);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_fail_when_amount_is_negative() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &(-1), &MAX_PREMIUM_BPS);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_premium_exceeds_bound() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &5);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #103)")]
fn should_fail_when_repayment_funds_insufficient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);
}

#[test]
fn should_leave_balances_untouched_when_loan_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.token_admin.mint(&borrower, &PREMIUM);

    let result =
        sut.initiator
            .try_start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);

    assert!(result.is_err());
    assert_eq!(sut.token.balance(&borrower), PREMIUM);
    assert_eq!(sut.token.balance(&sut.receiver.address), 0);
    assert_eq!(sut.token.balance(&sut.pool.address), POOL_LIQUIDITY);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #106)")]
fn should_fail_when_pool_skips_receiver() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_system(&env);
    let borrower = Address::generate(&env);

    sut.pool_admin.set_skip_receiver(&true);

    sut.initiator
        .start_flash_loan(&borrower, &sut.token.address, &AMOUNT, &MAX_PREMIUM_BPS);
}
