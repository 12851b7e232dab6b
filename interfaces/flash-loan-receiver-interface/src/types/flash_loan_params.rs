use soroban_sdk::contracttype;

/// Denominator for basis point values.
pub const PERCENTAGE_FACTOR: i128 = 10_000;

/// Borrower-side loan parameters, XDR-encoded into the opaque `params`
/// blob passed through the pool to `execute_operation`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashLoanParams {
    /// Premium ceiling the borrower accepts, in basis points of the
    /// borrowed amount.
    pub max_premium_bps: u32,
}
