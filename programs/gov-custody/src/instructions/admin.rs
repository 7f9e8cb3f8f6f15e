use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::GovCustodyError;
use crate::events::{ConfigAuthorityUpdated, ConfigParamsUpdated};
use crate::state::Config;

// =============================================================================
// Update Config Authority
// =============================================================================

#[derive(Accounts)]
pub struct UpdateConfigAuthority<'info> {
    #[account(
        constraint = config_authority.key() == config.config_authority @ GovCustodyError::Unauthorized
    )]
    pub config_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

pub fn update_config_authority(
    ctx: Context<UpdateConfigAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        GovCustodyError::InvalidAuthority
    );

    let config = &mut ctx.accounts.config;
    let old_authority = config.config_authority;
    config.config_authority = new_authority;

    msg!(
        "Config authority transferred from {} to {}",
        old_authority,
        new_authority
    );

    emit!(ConfigAuthorityUpdated {
        old_authority,
        new_authority,
    });

    Ok(())
}

// =============================================================================
// Update Config Params
// =============================================================================

#[derive(Accounts)]
pub struct UpdateConfigParams<'info> {
    #[account(
        constraint = config_authority.key() == config.config_authority @ GovCustodyError::Unauthorized
    )]
    pub config_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

/// Only tickets and vests created after this call see the new values
pub fn update_config_params(
    ctx: Context<UpdateConfigParams>,
    claim_delay: i64,
    redeem_delay: i64,
    cliff_period: i64,
    linear_vesting_period: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.set_params(claim_delay, redeem_delay, cliff_period, linear_vesting_period)?;

    msg!(
        "Config params updated: claim_delay={}, redeem_delay={}, cliff_period={}, linear_vesting_period={}",
        claim_delay,
        redeem_delay,
        cliff_period,
        linear_vesting_period
    );

    emit!(ConfigParamsUpdated {
        authority: ctx.accounts.config_authority.key(),
        claim_delay,
        redeem_delay,
        cliff_period,
        linear_vesting_period,
    });

    Ok(())
}
