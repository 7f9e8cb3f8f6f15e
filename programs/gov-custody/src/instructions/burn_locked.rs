use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, GOV_MINT_SEED, REDEEM_TICKET_SEED, USER_SEED};
use crate::error::GovCustodyError;
use crate::events::Burned;
use crate::state::{close_record, load_record, store_record, Config, LockedAccount, RedeemTicket, User};

/// Burn governance tokens against a locked deposit and open a redeem ticket
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Governance base units to burn
///
/// # Flow
/// 1. Load the locked account and check the owner signed
/// 2. Debit `amount` from its remaining principal
/// 3. Burn the governance tokens from the owner
/// 4. Close the locked account if nothing remains, otherwise write it back
/// 5. Create RedeemTicket ["redeem_ticket", owner, redeem_index]
///
#[derive(Accounts)]
pub struct BurnLocked<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    /// CHECK: Loaded as a LockedAccount in the handler
    #[account(mut)]
    pub locked_account: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + RedeemTicket::INIT_SPACE,
        seeds = [REDEEM_TICKET_SEED, owner.key().as_ref(), &owner_user_account.redeem_index.to_le_bytes()],
        bump
    )]
    pub redeem_ticket: Account<'info, RedeemTicket>,

    #[account(
        mut,
        seeds = [GOV_MINT_SEED],
        bump = config.gov_mint_bump
    )]
    pub gov_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = gov_mint,
        token::authority = owner
    )]
    pub owner_gov_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> BurnLocked<'info> {
    fn burn_from_owner(&self, amount: u64) -> Result<()> {
        token::burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.gov_mint.to_account_info(),
                    from: self.owner_gov_account.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
        )
    }
}

pub fn handler_burn_locked(ctx: Context<BurnLocked>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let locked_info = ctx.accounts.locked_account.to_account_info();
    let mut locked: LockedAccount = load_record(&locked_info)?;

    require_keys_eq!(locked.owner, owner, GovCustodyError::Unauthorized);

    let redeem_amount = locked.record_burn(amount)?;

    ctx.accounts.burn_from_owner(amount)?;

    let source_closed = locked.is_drained();
    if source_closed {
        close_record(&locked_info, &ctx.accounts.owner.to_account_info())?;
    } else {
        store_record(&locked_info, &locked)?;
    }

    let redeem_delay = ctx.accounts.config.redeem_delay;
    let redeem_index = ctx.accounts.owner_user_account.take_redeem_index()?;

    let redeem_ticket = &mut ctx.accounts.redeem_ticket;
    redeem_ticket.owner = owner;
    redeem_ticket.source_account = *locked_info.key;
    redeem_ticket.redeem_index = redeem_index;
    redeem_ticket.asset = locked.asset;
    redeem_ticket.amount = redeem_amount;
    redeem_ticket.redeem_delay = redeem_delay;
    redeem_ticket.created_at = now;
    redeem_ticket.bump = ctx.bumps.redeem_ticket;

    msg!(
        "Burned {} gov units from lock #{}. Remaining: {}",
        amount,
        locked.lock_index,
        locked.remaining
    );
    msg!(
        "Redeem ticket #{} for {} {:?} units, redeemable at {}",
        redeem_index,
        redeem_amount,
        locked.asset,
        redeem_ticket.matures_at()?
    );
    if source_closed {
        msg!("Lock #{} fully burned and closed", locked.lock_index);
    }

    emit!(Burned {
        owner,
        source_account: *locked_info.key,
        redeem_ticket: redeem_ticket.key(),
        asset: locked.asset,
        burned_amount: amount,
        redeem_amount,
        source_closed,
    });

    Ok(())
}
