use anchor_lang::prelude::*;

/// Wallet membership record.
///
/// Used as a marker account - presence of the account at the address derived from
/// the whitelist config and the wallet indicates whitelisting.
#[account]
#[derive(InitSpace)]
pub struct Wallet {
    // The bump used to derive the PDA for this account
    // Stored so removal can re-validate the address without searching for it
    pub bump: u8,
}
