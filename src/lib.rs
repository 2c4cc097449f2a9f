#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

pub use errors::WhitelistError;

declare_id!("5RwKyqR6cDzFiqB5qfBsyqxzb6QuaRy249NwxJJ2154v");

#[program]
pub mod whitelist_pda {
    use super::*;

    /// Create a whitelist keyed by `seed` with the signer as its authority
    ///
    /// The config address is derived from the seed and the signer, so each authority
    /// can hold one whitelist per seed. Starts with a counter of zero.
    pub fn create_whitelist(ctx: Context<CreateWhitelist>, seed: String) -> Result<()> {
        ctx.accounts.create_whitelist(&seed)
    }

    /// Add a wallet to the whitelist
    /// Signer must be the whitelist authority
    pub fn add_wallet(
        ctx: Context<AddWallet>,
        _seed: String,
        wallet_address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.add_wallet(wallet_address, &ctx.bumps)
    }

    /// Check that a wallet is whitelisted
    ///
    /// Fails with `NonMatchingPDAs` if the supplied record is not the one derived from
    /// `wallet_address`, and with `WalletNotWhitelisted` if the record does not exist.
    /// Unpermissioned
    pub fn check_wallet(
        ctx: Context<CheckWallet>,
        _seed: String,
        wallet_address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.check_wallet(wallet_address)
    }

    /// Remove a wallet from the whitelist and return the record's rent to the authority
    /// Signer must be the whitelist authority
    pub fn remove_wallet(
        ctx: Context<RemoveWallet>,
        _seed: String,
        wallet_address: Pubkey,
        _bump: u8,
    ) -> Result<()> {
        ctx.accounts.remove_wallet(wallet_address)
    }
}
