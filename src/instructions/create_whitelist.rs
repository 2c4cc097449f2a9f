use anchor_lang::prelude::*;

use crate::{
    constants::CONFIG_ACCOUNT_SPACE, events::WhitelistCreated, state::Config,
    utils::validate_seed,
};

/// Create a new whitelist owned by the signer.
/// Fails with `AccountAlreadyInUse` if the signer already created a whitelist with `seed`.
#[derive(Accounts)]
#[instruction(seed: String)]
pub struct CreateWhitelist<'info> {
    /// The future whitelist authority, pays for account creation
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The `Config` account being created
    /// # PDA Seeds
    /// - The whitelist seed
    /// - The authority's address
    #[account(
        init,
        payer = authority,
        space = CONFIG_ACCOUNT_SPACE,
        seeds = [seed.as_bytes(), authority.key().as_ref()],
        bump,
    )]
    pub whitelist_config: Account<'info, Config>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> CreateWhitelist<'info> {
    /// Initialize the whitelist config with the signer as authority and an empty counter
    /// # Arguments
    /// * `seed` - The caller-chosen seed the config address is derived from
    /// # Returns
    /// * `Result<()>` - Ok if the whitelist is created, Err otherwise
    /// # Errors
    /// * `WhitelistError::InvalidSeed` - If the seed is empty
    pub fn create_whitelist(&mut self, seed: &str) -> Result<()> {
        validate_seed(seed)?;

        self.whitelist_config.set_inner(Config {
            authority: self.authority.key(),
            counter: 0,
        });

        emit!(WhitelistCreated {
            whitelist_config: self.whitelist_config.key(),
            authority: self.authority.key(),
        });

        Ok(())
    }
}
