// =============================================================================
// Governance Custody
// =============================================================================
//
// Custody and deferred settlement for a governance token (gToken) backed by
// two reserve tokens held in program-owned vaults.
//
// - Deposit a reserve token, get a claim ticket that matures after claim_delay
// - Claim the ticket to mint gToken (1:1 primary, SECONDARY_MULTIPLIER:1 secondary)
// - Burn gToken against a locked or vest account, get a redeem ticket
// - Redeem the ticket after redeem_delay to withdraw the reserve token
//
// Vest deposits can only be burned as their cliff + linear schedule unlocks.
// Every ticket is deleted when consumed, so it can never settle twice.
// =============================================================================

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod test_utils;

pub use instructions::*;
use state::Asset;

declare_id!("AJ9Uo6X4rb4q9EStGZiYjWFuLmEQomepm66b6jbfEMNT");

#[program]
pub mod gov_custody {
    use super::*;

    // =========================================================================
    // Setup & Admin
    // =========================================================================

    /// Create the config, governance mint and both reserve vaults
    ///
    /// Only the program upgrade authority may call this, and only once.
    /// A repeat call fails with AlreadyInitialized.
    ///
    /// # Arguments
    /// * `config_authority` - Key allowed to update the config
    /// * `claim_delay` - Seconds before a claim ticket matures
    /// * `redeem_delay` - Seconds before a redeem ticket matures
    /// * `cliff_period` - Seconds before a vest starts unlocking
    /// * `linear_vesting_period` - Seconds over which a vest unlocks after the cliff
    pub fn initialize(
        ctx: Context<Initialize>,
        config_authority: Pubkey,
        claim_delay: i64,
        redeem_delay: i64,
        cliff_period: i64,
        linear_vesting_period: i64,
    ) -> Result<()> {
        instructions::initialize::handler_initialize(
            ctx,
            config_authority,
            claim_delay,
            redeem_delay,
            cliff_period,
            linear_vesting_period,
        )
    }

    /// Hand the config over to a new authority (config authority only)
    pub fn update_config_authority(
        ctx: Context<UpdateConfigAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::admin::update_config_authority(ctx, new_authority)
    }

    /// Replace all four time parameters (config authority only)
    ///
    /// Outstanding tickets and vests keep the values they were created with.
    pub fn update_config_params(
        ctx: Context<UpdateConfigParams>,
        claim_delay: i64,
        redeem_delay: i64,
        cliff_period: i64,
        linear_vesting_period: i64,
    ) -> Result<()> {
        instructions::admin::update_config_params(
            ctx,
            claim_delay,
            redeem_delay,
            cliff_period,
            linear_vesting_period,
        )
    }

    /// Create the address-counter registry for `owner`
    pub fn register_user(ctx: Context<RegisterUser>, owner: Pubkey) -> Result<()> {
        instructions::register_user::handler_register_user(ctx, owner)
    }

    // =========================================================================
    // Deposits
    // =========================================================================

    /// Deposit reserve tokens into a locked account plus a claim ticket
    ///
    /// # Arguments
    /// * `asset` - Reserve token being deposited
    /// * `amount` - Reserve base units, must be greater than zero
    pub fn deposit_locked(ctx: Context<DepositLocked>, asset: Asset, amount: u64) -> Result<()> {
        instructions::deposit_locked::handler_deposit_locked(ctx, asset, amount)
    }

    /// Deposit reserve tokens into a vest account plus a claim ticket
    ///
    /// # Arguments
    /// * `asset` - Reserve token being deposited
    /// * `amount` - Reserve base units, must be greater than zero
    pub fn deposit_vest(ctx: Context<DepositVest>, asset: Asset, amount: u64) -> Result<()> {
        instructions::deposit_vest::handler_deposit_vest(ctx, asset, amount)
    }

    // =========================================================================
    // Tickets
    // =========================================================================

    /// Mint gToken for a matured claim ticket and delete it
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler_claim(ctx)
    }

    /// Burn gToken against a locked account and open a redeem ticket
    ///
    /// # Arguments
    /// * `amount` - gToken base units; multiple of SECONDARY_MULTIPLIER for secondary locks
    pub fn burn_locked(ctx: Context<BurnLocked>, amount: u64) -> Result<()> {
        instructions::burn_locked::handler_burn_locked(ctx, amount)
    }

    /// Burn unlocked gToken against a vest account and open a redeem ticket
    ///
    /// # Arguments
    /// * `amount` - gToken base units, at most what has unlocked and not been burned
    pub fn burn_vest(ctx: Context<BurnVest>, amount: u64) -> Result<()> {
        instructions::burn_vest::handler_burn_vest(ctx, amount)
    }

    /// Withdraw reserve tokens for a matured redeem ticket and delete it
    pub fn redeem(ctx: Context<Redeem>) -> Result<()> {
        instructions::redeem::handler_redeem(ctx)
    }
}
