use anchor_lang::prelude::*;

/// Event emitted when a new whitelist is created
/// Fields:
/// - whitelist_config: The address of the new `Config` account
/// - authority: The public key allowed to mutate the whitelist
#[event]
pub struct WhitelistCreated {
    pub whitelist_config: Pubkey,
    pub authority: Pubkey,
}

/// Event emitted when a wallet is added to a whitelist
/// Fields:
/// - whitelist_config: The whitelist the wallet was added to
/// - wallet: The whitelisted wallet
/// - counter: The number of whitelisted wallets after the addition
#[event]
pub struct WalletAdded {
    pub whitelist_config: Pubkey,
    pub wallet: Pubkey,
    pub counter: u64,
}

/// Event emitted when a wallet is removed from a whitelist
/// Fields:
/// - whitelist_config: The whitelist the wallet was removed from
/// - wallet: The removed wallet
/// - counter: The number of whitelisted wallets after the removal
#[event]
pub struct WalletRemoved {
    pub whitelist_config: Pubkey,
    pub wallet: Pubkey,
    pub counter: u64,
}
