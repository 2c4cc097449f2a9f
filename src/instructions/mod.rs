pub mod check_wallet;
pub mod create_whitelist;
pub mod whitelist_operations;


pub use check_wallet::*;
pub use create_whitelist::*;
pub use whitelist_operations::*;
