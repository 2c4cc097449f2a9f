use anchor_lang::prelude::*;

use crate::errors::WhitelistError;

/// Config state account - one per (seed, authority) whitelist
#[account]
#[derive(InitSpace)]
pub struct Config {
    // The address allowed to add and remove wallets, set once at creation
    pub authority: Pubkey,

    // Number of live `Wallet` records derived from this config
    pub counter: u64,
}

impl Config {
    /// Record a newly created `Wallet` entry
    /// # Returns
    /// * `Result<u64>` - The counter after the increment
    /// # Errors
    /// * `WhitelistError::CounterOverflow` - If the counter is already at `u64::MAX`
    pub fn record_wallet_added(&mut self) -> Result<u64> {
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or(WhitelistError::CounterOverflow)?;
        Ok(self.counter)
    }

    /// Record a closed `Wallet` entry
    /// # Returns
    /// * `Result<u64>` - The counter after the decrement
    /// # Errors
    /// * `WhitelistError::CounterUnderflow` - If the counter is already zero
    pub fn record_wallet_removed(&mut self) -> Result<u64> {
        self.counter = self
            .counter
            .checked_sub(1)
            .ok_or(WhitelistError::CounterUnderflow)?;
        Ok(self.counter)
    }
}
