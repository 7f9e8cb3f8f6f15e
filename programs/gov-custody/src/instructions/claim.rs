use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, GOV_MINT_SEED};
use crate::error::GovCustodyError;
use crate::events::Claimed;
use crate::state::{close_record, load_record, ClaimTicket, Config};

/// Mint the governance tokens promised by a matured claim ticket
///
/// # Flow
/// 1. Load the ticket (NotFound once consumed)
/// 2. Check owner and maturity
/// 3. Mint ticket.amount to the owner's governance token account
/// 4. Delete the ticket, rent back to the owner
///
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Loaded as a ClaimTicket in the handler
    #[account(mut)]
    pub claim_ticket: UncheckedAccount<'info>,

    /// CHECK: PDA mint authority, holds no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [GOV_MINT_SEED],
        bump = config.gov_mint_bump
    )]
    pub gov_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = gov_mint,
        associated_token::authority = owner
    )]
    pub owner_gov_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler_claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let ticket_info = ctx.accounts.claim_ticket.to_account_info();
    let ticket: ClaimTicket = load_record(&ticket_info)?;

    require_keys_eq!(
        ticket.owner,
        ctx.accounts.owner.key(),
        GovCustodyError::Unauthorized
    );
    ticket.ensure_mature(now)?;

    let seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.gov_mint.to_account_info(),
                to: ctx.accounts.owner_gov_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        ticket.amount,
    )?;

    close_record(&ticket_info, &ctx.accounts.owner.to_account_info())?;

    msg!(
        "Claimed {} gov units for {} from {}",
        ticket.amount,
        ticket.owner,
        ticket.source_account
    );

    emit!(Claimed {
        owner: ticket.owner,
        claim_ticket: *ticket_info.key,
        source_account: ticket.source_account,
        amount: ticket.amount,
    });

    Ok(())
}
