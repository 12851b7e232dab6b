use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, addresses_provider: &Address, receiver: &Address) {
    let topics = (Symbol::new(e, "initialize"), addresses_provider.clone());
    e.events().publish(topics, receiver.clone());
}

pub(crate) fn flash_loan(e: &Env, who: &Address, asset: &Address, amount: i128, residual: i128) {
    let topics = (Symbol::new(e, "flash_loan"), who.clone(), asset.clone());
    e.events().publish(topics, (amount, residual));
}
