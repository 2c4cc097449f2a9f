use anchor_lang::prelude::*;

use crate::{
    constants::WALLET_ACCOUNT_SPACE,
    events::{WalletAdded, WalletRemoved},
    state::{Config, Wallet},
};

/// Add a wallet to a whitelist.
/// Only the whitelist authority can add wallets.
#[derive(Accounts)]
#[instruction(seed: String, wallet_address: Pubkey)]
pub struct AddWallet<'info> {
    /// The whitelist the wallet is added to
    /// # PDA Seeds
    /// - The whitelist seed
    /// - The authority's address
    #[account(
        mut,
        seeds = [seed.as_bytes(), authority.key().as_ref()],
        bump,
        has_one = authority,
    )]
    pub whitelist_config: Account<'info, Config>,

    /// The `Wallet` record being created. Fails with `AccountAlreadyInUse` if the
    /// wallet is already whitelisted.
    /// # PDA Seeds
    /// - The whitelist config address
    /// - The wallet being whitelisted
    #[account(
        init,
        payer = authority,
        space = WALLET_ACCOUNT_SPACE,
        seeds = [whitelist_config.key().as_ref(), wallet_address.as_ref()],
        bump,
    )]
    pub wallet_pda: Account<'info, Wallet>,

    /// The whitelist authority, pays for the record
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> AddWallet<'info> {
    /// Create the wallet's record and bump the whitelist counter
    /// # Arguments
    /// * `wallet_address` - The wallet to whitelist
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the wallet is whitelisted, Err otherwise
    pub fn add_wallet(&mut self, wallet_address: Pubkey, bumps: &AddWalletBumps) -> Result<()> {
        self.wallet_pda.set_inner(Wallet {
            bump: bumps.wallet_pda,
        });

        let counter = self.whitelist_config.record_wallet_added()?;

        emit!(WalletAdded {
            whitelist_config: self.whitelist_config.key(),
            wallet: wallet_address,
            counter,
        });

        Ok(())
    }
}

/// Remove a wallet from a whitelist by closing its `Wallet` record.
/// Only the whitelist authority can remove wallets.
#[derive(Accounts)]
#[instruction(seed: String, wallet_address: Pubkey, bump: u8)]
pub struct RemoveWallet<'info> {
    /// The whitelist the wallet is removed from
    /// # PDA Seeds
    /// - The whitelist seed
    /// - The authority's address
    #[account(
        mut,
        seeds = [seed.as_bytes(), authority.key().as_ref()],
        bump,
        has_one = authority,
    )]
    pub whitelist_config: Account<'info, Config>,

    /// The `Wallet` record being closed. Fails with `AccountNotInitialized` if the
    /// wallet was never added or has already been removed.
    /// # PDA Seeds
    /// - The whitelist config address
    /// - The wallet being removed
    #[account(
        mut,
        close = authority,
        seeds = [whitelist_config.key().as_ref(), wallet_address.as_ref()],
        bump = bump,
    )]
    pub wallet_pda: Account<'info, Wallet>,

    /// The whitelist authority, receives the lamports from closing the record
    #[account(mut)]
    pub authority: Signer<'info>,
}

impl<'info> RemoveWallet<'info> {
    /// Decrement the whitelist counter; the record itself is closed by Anchor on exit
    /// # Arguments
    /// * `wallet_address` - The wallet to remove
    /// # Returns
    /// * `Result<()>` - Ok if the wallet is removed, Err otherwise
    pub fn remove_wallet(&mut self, wallet_address: Pubkey) -> Result<()> {
        let counter = self.whitelist_config.record_wallet_removed()?;

        emit!(WalletRemoved {
            whitelist_config: self.whitelist_config.key(),
            wallet: wallet_address,
            counter,
        });

        Ok(())
    }
}
