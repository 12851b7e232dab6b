use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, addresses_provider: &Address, initiator: &Address) {
    let topics = (Symbol::new(e, "initialize"), addresses_provider.clone());
    e.events().publish(topics, initiator.clone());
}

pub(crate) fn repayment(e: &Env, asset: &Address, amount: i128, premium: i128) {
    let topics = (symbol_short!("repayment"), asset.clone());
    e.events().publish(topics, (amount, premium));
}
