use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    InvalidAmount = 2,
    MustBeNonNegative = 3,

    UnauthorizedCaller = 100,
    UntrustedInitiator = 101,
    PremiumTooHigh = 102,
    InsufficientRepaymentFunds = 103,
    AssetTransferFailed = 104,
    InvalidLoanParams = 105,
    LoanNotSettled = 106,

    MathOverflowError = 200,
}
