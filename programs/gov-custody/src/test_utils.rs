use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::*;

pub fn assert_error<T>(result: Result<T>, expected: GovCustodyError) {
    match result {
        Ok(_) => panic!("expected {:?}, got Ok", expected),
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        Err(other) => panic!("expected {:?}, got {:?}", expected, other),
    }
}

pub fn sample_config() -> Config {
    Config {
        config_authority: Pubkey::new_unique(),
        gov_mint: Pubkey::new_unique(),
        primary_mint: Pubkey::new_unique(),
        secondary_mint: Pubkey::new_unique(),
        claim_delay: 60,
        redeem_delay: 120,
        cliff_period: 100,
        linear_vesting_period: 1_000,
        is_initialized: true,
        bump: 255,
        authority_bump: 254,
        gov_mint_bump: 253,
        primary_vault_bump: 252,
        secondary_vault_bump: 251,
    }
}

pub fn sample_user(owner: Pubkey) -> User {
    User {
        owner,
        lock_index: 0,
        vest_index: 0,
        redeem_index: 0,
        bump: 255,
    }
}

pub fn sample_locked(asset: Asset, total_amount: u64) -> LockedAccount {
    LockedAccount {
        owner: Pubkey::new_unique(),
        lock_index: 0,
        asset,
        total_amount,
        remaining: total_amount,
        bump: 255,
    }
}

pub fn sample_vest(
    asset: Asset,
    total_amount: u64,
    start_ts: i64,
    cliff_period: i64,
    linear_vesting_period: i64,
) -> VestAccount {
    VestAccount {
        owner: Pubkey::new_unique(),
        vest_index: 0,
        asset,
        total_amount,
        start_ts,
        cliff_period,
        linear_vesting_period,
        burned_amount: 0,
        bump: 255,
    }
}

pub fn sample_claim_ticket(asset: Asset, amount: u64, created_at: i64, claim_delay: i64) -> ClaimTicket {
    ClaimTicket {
        owner: Pubkey::new_unique(),
        source_account: Pubkey::new_unique(),
        asset,
        amount,
        claim_delay,
        created_at,
        bump: 255,
    }
}

pub fn sample_redeem_ticket(asset: Asset, amount: u64, created_at: i64, redeem_delay: i64) -> RedeemTicket {
    RedeemTicket {
        owner: Pubkey::new_unique(),
        source_account: Pubkey::new_unique(),
        redeem_index: 0,
        asset,
        amount,
        redeem_delay,
        created_at,
        bump: 255,
    }
}
