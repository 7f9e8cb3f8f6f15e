use anchor_lang::prelude::*;

use crate::error::GovCustodyError;

/// Per-owner registry of address counters
/// PDA: ["user", owner]
///
/// Every counter only moves forward, so each derived lock, vest or redeem
/// ticket address is used at most once for this owner.
#[account]
#[derive(InitSpace)]
pub struct User {
    /// Owner whose records this registry numbers
    pub owner: Pubkey,

    /// Index of the next locked account: ["locked_account", owner, lock_index]
    pub lock_index: u64,

    /// Index of the next vest account: ["vest_account", owner, vest_index]
    pub vest_index: u64,

    /// Index of the next redeem ticket: ["redeem_ticket", owner, redeem_index]
    pub redeem_index: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl User {
    pub fn take_lock_index(&mut self) -> Result<u64> {
        take_next(&mut self.lock_index)
    }

    pub fn take_vest_index(&mut self) -> Result<u64> {
        take_next(&mut self.vest_index)
    }

    pub fn take_redeem_index(&mut self) -> Result<u64> {
        take_next(&mut self.redeem_index)
    }
}

fn take_next(counter: &mut u64) -> Result<u64> {
    let current = *counter;
    *counter = current
        .checked_add(1)
        .ok_or(GovCustodyError::MathOverflow)?;
    Ok(current)
}
