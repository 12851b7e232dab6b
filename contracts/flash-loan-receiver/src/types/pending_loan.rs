use soroban_sdk::{contracttype, Address};

/// Loan the initiator is requesting from the pool and the callback has not
/// yet settled. Written to temporary storage by `register_loan` right
/// before the initiator invokes the pool and consumed by the callback, so
/// a callback with no matching record is spoofed, replayed or reentrant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingLoan {
    pub asset: Address,
    pub amount: i128,
}
