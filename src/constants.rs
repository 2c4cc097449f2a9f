use anchor_lang::prelude::*;

/// Maximum length in bytes of a single PDA seed (mirrors `solana_pubkey::MAX_SEED_LEN`)
pub const MAX_SEED_LEN: usize = 32;

/// Size of the Anchor account discriminator prefixed to every program account
pub const DISCRIMINATOR_LEN: usize = 8;

// ACCOUNT SPACE

/// Space allocated for a whitelist `Config` account
pub const CONFIG_ACCOUNT_SPACE: usize = DISCRIMINATOR_LEN + crate::state::Config::INIT_SPACE;
/// Space allocated for a `Wallet` membership record
pub const WALLET_ACCOUNT_SPACE: usize = DISCRIMINATOR_LEN + crate::state::Wallet::INIT_SPACE;
