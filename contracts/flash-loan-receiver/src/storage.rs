use flash_loan_receiver_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

use crate::types::pending_loan::PendingLoan;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS;
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    AddressesProvider,
    Initiator,
    PendingLoan,
}

pub fn has_addresses_provider(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::AddressesProvider)
}

pub fn write_addresses_provider(env: &Env, addresses_provider: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::AddressesProvider, addresses_provider);
}

pub fn read_addresses_provider(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::AddressesProvider)
        .ok_or(Error::Uninitialized)
}

pub fn write_initiator(env: &Env, initiator: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Initiator, initiator);
}

pub fn read_initiator(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Initiator)
        .ok_or(Error::Uninitialized)
}

pub fn write_pending_loan(env: &Env, loan: &PendingLoan) {
    env.storage().temporary().set(&DataKey::PendingLoan, loan);
}

pub fn read_pending_loan(env: &Env) -> Option<PendingLoan> {
    env.storage().temporary().get(&DataKey::PendingLoan)
}

pub fn remove_pending_loan(env: &Env) {
    env.storage().temporary().remove(&DataKey::PendingLoan);
}

pub fn has_pending_loan(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::PendingLoan)
}
