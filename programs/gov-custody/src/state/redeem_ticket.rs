use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::Asset;

/// One-time right to withdraw reserve tokens after a burn
/// PDA: ["redeem_ticket", owner, redeem_index]
#[account]
#[derive(InitSpace)]
pub struct RedeemTicket {
    /// Receives the reserve tokens and the ticket rent
    pub owner: Pubkey,

    /// Locked or vest account the burn was charged to
    pub source_account: Pubkey,

    /// Registry index this ticket was derived from
    pub redeem_index: u64,

    /// Vault the reserve tokens come from
    pub asset: Asset,

    /// Reserve base units released on redeem
    pub amount: u64,

    /// Config.redeem_delay at creation time
    pub redeem_delay: i64,

    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl RedeemTicket {
    pub fn matures_at(&self) -> Result<i64> {
        self.created_at
            .checked_add(self.redeem_delay)
            .ok_or(error!(GovCustodyError::MathOverflow))
    }

    pub fn ensure_mature(&self, now: i64) -> Result<()> {
        require!(now >= self.matures_at()?, GovCustodyError::NotMature);
        Ok(())
    }
}
