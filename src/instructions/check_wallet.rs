use anchor_lang::prelude::*;

use crate::{
    errors::WhitelistError,
    state::Config,
    utils::{is_wallet_record, verify_wallet_address},
};

/// Check whether a wallet is whitelisted. Read-only.
#[derive(Accounts)]
#[instruction(seed: String, wallet_address: Pubkey)]
pub struct CheckWallet<'info> {
    /// The whitelist being queried
    /// # PDA Seeds
    /// - The whitelist seed
    /// - The authority's address
    #[account(
        seeds = [seed.as_bytes(), authority.key().as_ref()],
        bump,
        has_one = authority,
    )]
    pub whitelist_config: Account<'info, Config>,

    /// The whitelist authority. Identifies the whitelist, does not need to sign.
    ///
    /// CHECK: Seeds and `has_one` constraints on `whitelist_config` validate this key.
    pub authority: UncheckedAccount<'info>,

    /// The `Wallet` record for `wallet_address`, which may not exist
    ///
    /// CHECK: Address and contents are validated in `check_wallet`.
    pub wallet_pda: UncheckedAccount<'info>,
}

impl<'info> CheckWallet<'info> {
    /// Check the supplied record belongs to `wallet_address` and is live
    /// # Arguments
    /// * `wallet_address` - The wallet being checked
    /// # Returns
    /// * `Result<()>` - Ok if the wallet is whitelisted, Err otherwise
    /// # Errors
    /// * `WhitelistError::NonMatchingPDAs` - If `wallet_pda` is not derived from `wallet_address`
    /// * `WhitelistError::WalletNotWhitelisted` - If no live record exists for the wallet
    pub fn check_wallet(&self, wallet_address: Pubkey) -> Result<()> {
        // Address first: a mismatched record is a caller bug, not a negative answer
        verify_wallet_address(
            &self.wallet_pda.key(),
            &self.whitelist_config.key(),
            &wallet_address,
        )?;

        let wallet_info = self.wallet_pda.to_account_info();
        let is_whitelisted = is_wallet_record(
            wallet_info.owner,
            wallet_info.lamports(),
            &wallet_info.try_borrow_data()?,
        );
        require!(is_whitelisted, WhitelistError::WalletNotWhitelisted);

        msg!("Wallet is whitelisted: {}", wallet_address);

        Ok(())
    }
}
