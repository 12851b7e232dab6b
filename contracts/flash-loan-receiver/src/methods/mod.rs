pub mod execute_operation;
pub mod initialize;
pub mod register_loan;
pub mod settle_loan;
pub mod utils;
