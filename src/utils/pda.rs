use anchor_lang::{prelude::*, Discriminator};

use crate::{constants::MAX_SEED_LEN, errors::WhitelistError, state::Wallet};

/// Validate a whitelist seed before it is used as a PDA seed
/// # Arguments
/// * `seed` - The caller-chosen whitelist seed
/// # Returns
/// * `Result<()>` - Ok if the seed is non-empty and fits in a single PDA seed
#[inline(always)]
pub fn validate_seed(seed: &str) -> Result<()> {
    require!(
        !seed.is_empty() && seed.len() <= MAX_SEED_LEN,
        WhitelistError::InvalidSeed
    );
    Ok(())
}

/// Derive the `Config` address for a whitelist
/// # PDA Seeds
/// - The whitelist seed bytes
/// - The authority's address
/// # Returns
/// * `Result<(Pubkey, u8)>` - The config address and its canonical bump
/// # Errors
/// * `WhitelistError::InvalidSeed` - If the seed is empty or too long
/// * `WhitelistError::NoViableBump` - If no bump puts the address off the curve
pub fn find_config_address(seed: &str, authority: &Pubkey) -> Result<(Pubkey, u8)> {
    validate_seed(seed)?;
    Pubkey::try_find_program_address(&[seed.as_bytes(), authority.as_ref()], &crate::ID)
        .ok_or_else(|| error!(WhitelistError::NoViableBump))
}

/// Derive the `Wallet` record address for a wallet under a whitelist
/// # PDA Seeds
/// - The whitelist config address
/// - The wallet's address
pub fn find_wallet_address(whitelist_config: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[whitelist_config.as_ref(), wallet.as_ref()], &crate::ID)
}

/// Recompute the `Wallet` record address from the wallet argument and compare it
/// with the account actually supplied
/// # Returns
/// * `Result<u8>` - The canonical bump if the addresses match
/// # Errors
/// * `WhitelistError::NonMatchingPDAs` - If the supplied account is not the record for `wallet`
pub fn verify_wallet_address(
    supplied: &Pubkey,
    whitelist_config: &Pubkey,
    wallet: &Pubkey,
) -> Result<u8> {
    let (expected, bump) = find_wallet_address(whitelist_config, wallet);
    require_keys_eq!(expected, *supplied, WhitelistError::NonMatchingPDAs);
    Ok(bump)
}

/// Whether an account holds a live `Wallet` record.
///
/// Accounts still owned by the system program were never created or have been closed.
/// Anything owned by another program, or a different account type of this program, is
/// rejected as well.
pub fn is_wallet_record(owner: &Pubkey, lamports: u64, data: &[u8]) -> bool {
    *owner == crate::ID && lamports > 0 && data.starts_with(Wallet::DISCRIMINATOR)
}
