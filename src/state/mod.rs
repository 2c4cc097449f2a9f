pub mod config;
pub mod wallet;

pub use config::*;
pub use wallet::*;
