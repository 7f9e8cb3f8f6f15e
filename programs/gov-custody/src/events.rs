use anchor_lang::prelude::*;

use crate::state::Asset;

#[event]
pub struct Initialized {
    pub config_authority: Pubkey,
    pub gov_mint: Pubkey,
    pub primary_mint: Pubkey,
    pub secondary_mint: Pubkey,
}

#[event]
pub struct ConfigAuthorityUpdated {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

#[event]
pub struct ConfigParamsUpdated {
    pub authority: Pubkey,
    pub claim_delay: i64,
    pub redeem_delay: i64,
    pub cliff_period: i64,
    pub linear_vesting_period: i64,
}

#[event]
pub struct UserRegistered {
    pub owner: Pubkey,
    pub user_account: Pubkey,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub payer: Pubkey,
    pub asset: Asset,
    pub vesting: bool,
    pub raw_amount: u64,
    pub governance_amount: u64,
    pub source_account: Pubkey,
    pub claim_ticket: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct Claimed {
    pub owner: Pubkey,
    pub claim_ticket: Pubkey,
    pub source_account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Burned {
    pub owner: Pubkey,
    pub source_account: Pubkey,
    pub redeem_ticket: Pubkey,
    pub asset: Asset,
    pub burned_amount: u64,
    pub redeem_amount: u64,
    pub source_closed: bool,
}

#[event]
pub struct Redeemed {
    pub owner: Pubkey,
    pub redeem_ticket: Pubkey,
    pub asset: Asset,
    pub amount: u64,
}
