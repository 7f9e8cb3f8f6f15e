use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{CLAIM_TICKET_SEED, CONFIG_SEED, LOCKED_ACCOUNT_SEED, USER_SEED, VAULT_SEED};
use crate::error::GovCustodyError;
use crate::events::Deposited;
use crate::state::{Asset, ClaimTicket, Config, LockedAccount, User};

/// Lock reserve tokens and issue a claim ticket for the governance amount
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `asset` - Which reserve token is deposited
/// * `amount` - Reserve base units to move into the vault
///
/// # Flow
/// 1. Transfer reserve tokens from payer to the asset's vault
/// 2. Create LockedAccount ["locked_account", owner, lock_index]
/// 3. Create ClaimTicket ["claim_ticket", locked_account]
/// 4. Advance the owner's lock_index
///
#[derive(Accounts)]
#[instruction(asset: Asset)]
pub struct DepositLocked<'info> {
    /// Funds the deposit and the new accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Owner of the new lock; only its key is used
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
        space = 8 + LockedAccount::INIT_SPACE,
        seeds = [LOCKED_ACCOUNT_SEED, owner.key().as_ref(), &owner_user_account.lock_index.to_le_bytes()],
        bump
    )]
    pub locked_account: Account<'info, LockedAccount>,

    #[account(
        init,
        payer = payer,
        space = 8 + ClaimTicket::INIT_SPACE,
        seeds = [CLAIM_TICKET_SEED, locked_account.key().as_ref()],
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

impl<'info> DepositLocked<'info> {
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

pub fn handler_deposit_locked(ctx: Context<DepositLocked>, asset: Asset, amount: u64) -> Result<()> {
    require!(amount > 0, GovCustodyError::ZeroAmount);

    let governance_amount = asset.to_governance_amount(amount)?;
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.transfer_to_vault(amount)?;

    let owner = ctx.accounts.owner.key();
    let claim_delay = ctx.accounts.config.claim_delay;
    let lock_index = ctx.accounts.owner_user_account.take_lock_index()?;

    let locked_account = &mut ctx.accounts.locked_account;
    locked_account.owner = owner;
    locked_account.lock_index = lock_index;
    locked_account.asset = asset;
    locked_account.total_amount = governance_amount;
    locked_account.remaining = governance_amount;
    locked_account.bump = ctx.bumps.locked_account;
    let locked_key = locked_account.key();

    let claim_ticket = &mut ctx.accounts.claim_ticket;
    claim_ticket.owner = owner;
    claim_ticket.source_account = locked_key;
    claim_ticket.asset = asset;
    claim_ticket.amount = governance_amount;
    claim_ticket.claim_delay = claim_delay;
    claim_ticket.created_at = now;
    claim_ticket.bump = ctx.bumps.claim_ticket;

    msg!(
        "Locked {} {:?} units for {} as {} gov units (lock #{}), claimable at {}",
        amount,
        asset,
        owner,
        governance_amount,
        lock_index,
        claim_ticket.matures_at()?
    );

    emit!(Deposited {
        owner,
        payer: ctx.accounts.payer.key(),
        asset,
        vesting: false,
        raw_amount: amount,
        governance_amount,
        source_account: locked_key,
        claim_ticket: claim_ticket.key(),
        created_at: now,
    });

    Ok(())
}
