use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, GOV_MINT_SEED, REDEEM_TICKET_SEED, USER_SEED};
use crate::error::GovCustodyError;
use crate::events::Burned;
use crate::state::{load_record, store_record, Config, RedeemTicket, User, VestAccount};

/// Burn unlocked governance tokens against a vest and open a redeem ticket
///
/// The burnable amount is whatever the frozen schedule has unlocked at the
/// current timestamp minus what was burned before. The vest account is kept
/// after it is fully burned.
///
#[derive(Accounts)]
pub struct BurnVest<'info> {
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

    /// CHECK: Loaded as a VestAccount in the handler
    #[account(mut)]
    pub vest_account: UncheckedAccount<'info>,

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

impl<'info> BurnVest<'info> {
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

pub fn handler_burn_vest(ctx: Context<BurnVest>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let vest_info = ctx.accounts.vest_account.to_account_info();
    let mut vest: VestAccount = load_record(&vest_info)?;

    require_keys_eq!(vest.owner, owner, GovCustodyError::Unauthorized);

    let redeem_amount = vest.record_burn(amount, now)?;

    ctx.accounts.burn_from_owner(amount)?;

    store_record(&vest_info, &vest)?;

    let redeem_delay = ctx.accounts.config.redeem_delay;
    let redeem_index = ctx.accounts.owner_user_account.take_redeem_index()?;

    let redeem_ticket = &mut ctx.accounts.redeem_ticket;
    redeem_ticket.owner = owner;
    redeem_ticket.source_account = *vest_info.key;
    redeem_ticket.redeem_index = redeem_index;
    redeem_ticket.asset = vest.asset;
    redeem_ticket.amount = redeem_amount;
    redeem_ticket.redeem_delay = redeem_delay;
    redeem_ticket.created_at = now;
    redeem_ticket.bump = ctx.bumps.redeem_ticket;

    msg!(
        "Burned {} gov units from vest #{}. Burned total: {} of {}, still burnable: {}",
        amount,
        vest.vest_index,
        vest.burned_amount,
        vest.total_amount,
        vest.burnable_amount(now)?
    );
    msg!(
        "Redeem ticket #{} for {} {:?} units, redeemable at {}",
        redeem_index,
        redeem_amount,
        vest.asset,
        redeem_ticket.matures_at()?
    );

    emit!(Burned {
        owner,
        source_account: *vest_info.key,
        redeem_ticket: redeem_ticket.key(),
        asset: vest.asset,
        burned_amount: amount,
        redeem_amount,
        source_closed: false,
    });

    Ok(())
}
