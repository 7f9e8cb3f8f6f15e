use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, VAULT_SEED};
use crate::error::GovCustodyError;
use crate::events::Redeemed;
use crate::state::{close_record, load_record, Config, RedeemTicket};

/// Release reserve tokens for a matured redeem ticket
///
/// # Flow
/// 1. Load the ticket (NotFound once consumed)
/// 2. Check owner, maturity and that the vault matches the ticket's asset
/// 3. Transfer ticket.amount from the vault to the owner
/// 4. Delete the ticket, rent back to the owner
///
#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Loaded as a RedeemTicket in the handler
    #[account(mut)]
    pub redeem_ticket: UncheckedAccount<'info>,

    /// CHECK: PDA vault authority, holds no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub authority: UncheckedAccount<'info>,

    pub reserve_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, reserve_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_reserve_account.mint == reserve_mint.key() @ GovCustodyError::InvalidMint,
        constraint = owner_reserve_account.owner == owner.key() @ GovCustodyError::InvalidTokenAccountOwner
    )]
    pub owner_reserve_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler_redeem(ctx: Context<Redeem>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let ticket_info = ctx.accounts.redeem_ticket.to_account_info();
    let ticket: RedeemTicket = load_record(&ticket_info)?;

    require_keys_eq!(
        ticket.owner,
        ctx.accounts.owner.key(),
        GovCustodyError::Unauthorized
    );
    ticket.ensure_mature(now)?;
    require_keys_eq!(
        ctx.accounts.reserve_mint.key(),
        ctx.accounts.config.reserve_mint(ticket.asset),
        GovCustodyError::InvalidMint
    );
    // Vault seeds depend on the ticket's asset; bump must match the stored one
    require_eq!(
        ctx.bumps.vault,
        ctx.accounts.config.vault_bump(ticket.asset),
        GovCustodyError::InvalidMint
    );

    let seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_reserve_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        ticket.amount,
    )?;

    close_record(&ticket_info, &ctx.accounts.owner.to_account_info())?;

    msg!(
        "Redeemed {} {:?} units for {} (ticket #{})",
        ticket.amount,
        ticket.asset,
        ticket.owner,
        ticket.redeem_index
    );

    emit!(Redeemed {
        owner: ticket.owner,
        redeem_ticket: *ticket_info.key,
        asset: ticket.asset,
        amount: ticket.amount,
    });

    Ok(())
}
