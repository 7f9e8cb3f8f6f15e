use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::Asset;

/// Principal released under a cliff + linear schedule
/// PDA: ["vest_account", owner, vest_index]
///
/// The schedule is frozen at deposit time. The account is never closed,
/// it stays behind as vesting history once fully burned.
#[account]
#[derive(InitSpace)]
pub struct VestAccount {
    /// Owner allowed to burn against this vest
    pub owner: Pubkey,

    /// Registry index this vest was derived from
    pub vest_index: u64,

    /// Reserve asset that was deposited
    pub asset: Asset,

    /// Governance amount credited at deposit time
    pub total_amount: u64,

    /// Deposit timestamp, start of the cliff
    pub start_ts: i64,

    /// Copied from Config when the vest was created
    pub cliff_period: i64,
    pub linear_vesting_period: i64,

    /// Governance amount burned so far (only increases)
    pub burned_amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl VestAccount {
    pub fn cliff_end(&self) -> Result<i64> {
        self.start_ts
            .checked_add(self.cliff_period)
            .ok_or(error!(GovCustodyError::MathOverflow))
    }

    /// Amount unlocked at `now`, ignoring what was already burned
    ///
    /// - before `start_ts + cliff_period`: 0
    /// - from `start_ts + cliff_period + linear_vesting_period` on: total_amount
    /// - in between: total_amount * elapsed / linear_vesting_period, rounded down
    pub fn unlocked_amount(&self, now: i64) -> Result<u64> {
        let cliff_end = self.cliff_end()?;
        if now < cliff_end {
            return Ok(0);
        }

        let elapsed = now
            .checked_sub(cliff_end)
            .ok_or(GovCustodyError::MathOverflow)?;

        // Also covers a zero-length linear period
        if elapsed >= self.linear_vesting_period {
            return Ok(self.total_amount);
        }

        let unlocked = (self.total_amount as u128)
            .checked_mul(elapsed as u128)
            .ok_or(GovCustodyError::MathOverflow)?
            .checked_div(self.linear_vesting_period as u128)
            .ok_or(GovCustodyError::MathOverflow)?;

        u64::try_from(unlocked).map_err(|_| error!(GovCustodyError::MathOverflow))
    }

    /// Amount that may be burned at `now`
    pub fn burnable_amount(&self, now: i64) -> Result<u64> {
        Ok(self.unlocked_amount(now)?.saturating_sub(self.burned_amount))
    }

    /// Record a burn against the unlocked balance.
    /// Returns the reserve amount the matching redeem ticket releases.
    pub fn record_burn(&mut self, amount: u64, now: i64) -> Result<u64> {
        require!(amount > 0, GovCustodyError::ZeroAmount);
        require!(
            amount <= self.burnable_amount(now)?,
            GovCustodyError::AmountExceedsBalance
        );

        let redeem_amount = self.asset.to_underlying_amount(amount)?;

        self.burned_amount = self
            .burned_amount
            .checked_add(amount)
            .ok_or(GovCustodyError::MathOverflow)?;

        Ok(redeem_amount)
    }
}
