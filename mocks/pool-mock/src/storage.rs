use soroban_sdk::{contracttype, Address, Bytes, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    AddressesProvider,
    FlashLoanFee,
    InitiatorOverride,
    PremiumOverride,
    ParamsOverride,
    SkipReceiver,
}

pub fn write_addresses_provider(env: &Env, addresses_provider: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AddressesProvider, addresses_provider);
}

pub fn read_addresses_provider(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::AddressesProvider)
        .unwrap()
}

pub fn write_flash_loan_fee(env: &Env, fee: u32) {
    env.storage().instance().set(&DataKey::FlashLoanFee, &fee);
}

pub fn read_flash_loan_fee(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FlashLoanFee)
        .unwrap()
}

pub fn write_initiator_override(env: &Env, initiator: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::InitiatorOverride, initiator);
}

pub fn read_initiator_override(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::InitiatorOverride)
}

pub fn write_premium_override(env: &Env, premium: i128) {
    env.storage()
        .instance()
        .set(&DataKey::PremiumOverride, &premium);
}

pub fn read_premium_override(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::PremiumOverride)
}

pub fn write_params_override(env: &Env, params: &Bytes) {
    env.storage()
        .instance()
        .set(&DataKey::ParamsOverride, params);
}

pub fn read_params_override(env: &Env) -> Option<Bytes> {
    env.storage().instance().get(&DataKey::ParamsOverride)
}

pub fn write_skip_receiver(env: &Env, skip: bool) {
    env.storage().instance().set(&DataKey::SkipReceiver, &skip);
}

pub fn read_skip_receiver(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SkipReceiver)
        .unwrap_or(false)
}
