use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, GOV_DECIMALS, GOV_MINT_SEED, VAULT_SEED};
use crate::error::GovCustodyError;
use crate::events::Initialized;
use crate::state::Config;

/// Initialize the config, the governance mint and both reserve vaults
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `config_authority` - Key allowed to update the config afterwards
/// * `claim_delay`, `redeem_delay`, `cliff_period`, `linear_vesting_period` - Seconds
///
/// # Accounts
/// * `payer` - Program upgrade authority (signer, payer)
/// * `authority` - PDA owning both vaults and minting the governance token
/// * `config` - Config PDA
/// * `gov_mint` - Governance token mint PDA
/// * `primary_vault` / `secondary_vault` - Reserve vaults, one per reserve mint
///
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Must be the program's upgrade authority so nobody can front-run setup
    #[account(mut)]
    pub payer: Signer<'info>,

    /// This program's ProgramData, ["<program id>"] under the upgradeable loader
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID,
        constraint = program_data.upgrade_authority_address == Some(payer.key()) @ GovCustodyError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    /// CHECK: PDA signing for vault transfers and governance mints, holds no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump
    )]
    pub authority: UncheckedAccount<'info>,

    /// Created on the first call; a repeat call finds it initialized and fails
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = payer,
        seeds = [GOV_MINT_SEED],
        bump,
        mint::decimals = GOV_DECIMALS,
        mint::authority = authority
    )]
    pub gov_mint: Account<'info, Mint>,

    /// Primary converts 1:1, so it must carry GOV_DECIMALS
    #[account(
        constraint = primary_mint.decimals == GOV_DECIMALS @ GovCustodyError::InvalidMint
    )]
    pub primary_mint: Account<'info, Mint>,

    #[account(
        constraint = secondary_mint.key() != primary_mint.key() @ GovCustodyError::InvalidMint
    )]
    pub secondary_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = payer,
        seeds = [VAULT_SEED, primary_mint.key().as_ref()],
        bump,
        token::mint = primary_mint,
        token::authority = authority
    )]
    pub primary_vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = payer,
        seeds = [VAULT_SEED, secondary_mint.key().as_ref()],
        bump,
        token::mint = secondary_mint,
        token::authority = authority
    )]
    pub secondary_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_initialize(
    ctx: Context<Initialize>,
    config_authority: Pubkey,
    claim_delay: i64,
    redeem_delay: i64,
    cliff_period: i64,
    linear_vesting_period: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(!config.is_initialized, GovCustodyError::AlreadyInitialized);
    require!(
        config_authority != Pubkey::default(),
        GovCustodyError::InvalidAuthority
    );

    config.config_authority = config_authority;
    config.gov_mint = ctx.accounts.gov_mint.key();
    config.primary_mint = ctx.accounts.primary_mint.key();
    config.secondary_mint = ctx.accounts.secondary_mint.key();
    config.set_params(claim_delay, redeem_delay, cliff_period, linear_vesting_period)?;

    // Store bump seeds
    config.bump = ctx.bumps.config;
    config.authority_bump = ctx.bumps.authority;
    config.gov_mint_bump = ctx.bumps.gov_mint;
    config.primary_vault_bump = ctx.bumps.primary_vault;
    config.secondary_vault_bump = ctx.bumps.secondary_vault;

    config.is_initialized = true;

    msg!(
        "Config initialized: gov_mint={}, primary_mint={}, secondary_mint={}",
        config.gov_mint,
        config.primary_mint,
        config.secondary_mint
    );
    msg!(
        "claim_delay={}, redeem_delay={}, cliff_period={}, linear_vesting_period={}",
        config.claim_delay,
        config.redeem_delay,
        config.cliff_period,
        config.linear_vesting_period
    );

    emit!(Initialized {
        config_authority,
        gov_mint: config.gov_mint,
        primary_mint: config.primary_mint,
        secondary_mint: config.secondary_mint,
    });

    Ok(())
}
