pub mod error;
pub mod flash_loan_params;
