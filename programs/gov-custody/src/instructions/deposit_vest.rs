use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{CLAIM_TICKET_SEED, CONFIG_SEED, USER_SEED, VAULT_SEED, VEST_ACCOUNT_SEED};
use crate::error::GovCustodyError;
use crate::events::Deposited;
use crate::state::{Asset, ClaimTicket, Config, User, VestAccount};

/// Deposit reserve tokens under a cliff + linear vesting schedule
///
/// Same conversion and claim ticket as a locked deposit; the principal can
/// only be burned as it unlocks. The schedule is copied from Config now.
///
/// # Flow
/// 1. Transfer reserve tokens from payer to the asset's vault
/// 2. Create VestAccount ["vest_account", owner, vest_index]
/// 3. Create ClaimTicket ["claim_ticket", vest_account]
/// 4. Advance the owner's vest_index
///
#[derive(Accounts)]
#[instruction(asset: Asset)]
pub struct DepositVest<'info> {
    /// Funds the deposit and the new accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Beneficiary of the new vest; only its key is used
    pub owner: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [USER_SEED, owner.key().as_ref()],
        bump = owner_user_account.bump
    )]
    pub owner_user_account: Account<'info, User>,

    #[account(
        init,
        payer = payer,
        space = 8 + VestAccount::INIT_SPACE,
        seeds = [VEST_ACCOUNT_SEED, owner.key().as_ref(), &owner_user_account.vest_index.to_le_bytes()],
        bump
    )]
    pub vest_account: Account<'info, VestAccount>,

    #[account(
        init,
        payer = payer,
        space = 8 + ClaimTicket::INIT_SPACE,
        seeds = [CLAIM_TICKET_SEED, vest_account.key().as_ref()],
        bump
    )]
    pub claim_ticket: Account<'info, ClaimTicket>,

    #[account(
        constraint = reserve_mint.key() == config.reserve_mint(asset) @ GovCustodyError::InvalidMint
    )]
    pub reserve_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = reserve_mint,
        token::authority = payer
    )]
    pub payer_reserve_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, reserve_mint.key().as_ref()],
        bump = config.vault_bump(asset)
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> DepositVest<'info> {
    fn transfer_to_vault(&self, amount: u64) -> Result<()> {
        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.payer_reserve_account.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.payer.to_account_info(),
                },
            ),
            amount,
        )
    }
}

pub fn handler_deposit_vest(ctx: Context<DepositVest>, asset: Asset, amount: u64) -> Result<()> {
    require!(amount > 0, GovCustodyError::ZeroAmount);

    let governance_amount = asset.to_governance_amount(amount)?;
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.transfer_to_vault(amount)?;

    let owner = ctx.accounts.owner.key();
    let config = &ctx.accounts.config;
    let claim_delay = config.claim_delay;
    let cliff_period = config.cliff_period;
    let linear_vesting_period = config.linear_vesting_period;
    let vest_index = ctx.accounts.owner_user_account.take_vest_index()?;

    let vest_account = &mut ctx.accounts.vest_account;
    vest_account.owner = owner;
    vest_account.vest_index = vest_index;
    vest_account.asset = asset;
    vest_account.total_amount = governance_amount;
    vest_account.start_ts = now;
    vest_account.cliff_period = cliff_period;
    vest_account.linear_vesting_period = linear_vesting_period;
    vest_account.burned_amount = 0;
    vest_account.bump = ctx.bumps.vest_account;
    let vest_key = vest_account.key();

    let claim_ticket = &mut ctx.accounts.claim_ticket;
    claim_ticket.owner = owner;
    claim_ticket.source_account = vest_key;
    claim_ticket.asset = asset;
    claim_ticket.amount = governance_amount;
    claim_ticket.claim_delay = claim_delay;
    claim_ticket.created_at = now;
    claim_ticket.bump = ctx.bumps.claim_ticket;

    msg!(
        "Vested {} {:?} units for {} as {} gov units (vest #{}), claimable at {}",
        amount,
        asset,
        owner,
        governance_amount,
        vest_index,
        claim_ticket.matures_at()?
    );
    msg!(
        "Vesting starts unlocking at {} over {} seconds",
        now.checked_add(cliff_period).ok_or(GovCustodyError::MathOverflow)?,
        linear_vesting_period
    );

    emit!(Deposited {
        owner,
        payer: ctx.accounts.payer.key(),
        asset,
        vesting: true,
        raw_amount: amount,
        governance_amount,
        source_account: vest_key,
        claim_ticket: claim_ticket.key(),
        created_at: now,
    });

    Ok(())
}
