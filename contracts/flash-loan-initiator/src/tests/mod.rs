mod start_flash_loan;
