use anchor_lang::prelude::*;

// Variant order fixes the on-chain error codes (6000 onwards); append new variants at the end.
#[error_code]
pub enum WhitelistError {
    #[msg("Wallet is not in whitelist")]
    WalletNotWhitelisted,
    #[msg("PDA derived from address argument does not match that in argument")]
    NonMatchingPDAs,
    #[msg("Whitelist counter overflow")]
    CounterOverflow,
    #[msg("Whitelist counter underflow")]
    CounterUnderflow,
    #[msg("Seed is empty or longer than the maximum PDA seed length")]
    InvalidSeed,
    #[msg("Unable to find a viable program address bump seed")]
    NoViableBump,
}
