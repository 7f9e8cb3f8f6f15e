use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::Asset;

/// Outstanding principal of a non-vesting deposit
/// PDA: ["locked_account", owner, lock_index]
///
/// Closed once `remaining` reaches zero.
#[account]
#[derive(InitSpace)]
pub struct LockedAccount {
    /// Owner allowed to burn against this lock
    pub owner: Pubkey,

    /// Registry index this lock was derived from
    pub lock_index: u64,

    /// Reserve asset that was deposited
    pub asset: Asset,

    /// Governance amount credited at deposit time
    pub total_amount: u64,

    /// Governance amount that may still be burned and redeemed
    pub remaining: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl LockedAccount {
    /// Debit a burn from the outstanding principal.
    /// Returns the reserve amount the matching redeem ticket releases.
    pub fn record_burn(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, GovCustodyError::ZeroAmount);
        require!(amount <= self.remaining, GovCustodyError::AmountExceedsBalance);

        let redeem_amount = self.asset.to_underlying_amount(amount)?;

        self.remaining = self
            .remaining
            .checked_sub(amount)
            .ok_or(GovCustodyError::MathOverflow)?;

        Ok(redeem_amount)
    }

    pub fn is_drained(&self) -> bool {
        self.remaining == 0
    }
}
