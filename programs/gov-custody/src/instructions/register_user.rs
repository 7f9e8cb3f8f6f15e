use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::events::UserRegistered;
use crate::state::User;

/// Create the per-owner registry. Anyone may pay for it.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct RegisterUser<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + User::INIT_SPACE,
        seeds = [USER_SEED, owner.as_ref()],
        bump
    )]
    pub user_account: Account<'info, User>,

    pub system_program: Program<'info, System>,
}

pub fn handler_register_user(ctx: Context<RegisterUser>, owner: Pubkey) -> Result<()> {
    let user_account = &mut ctx.accounts.user_account;

    user_account.owner = owner;
    user_account.lock_index = 0;
    user_account.vest_index = 0;
    user_account.redeem_index = 0;
    user_account.bump = ctx.bumps.user_account;

    msg!("Registered user {} at {}", owner, user_account.key());

    emit!(UserRegistered {
        owner,
        user_account: user_account.key(),
    });

    Ok(())
}
