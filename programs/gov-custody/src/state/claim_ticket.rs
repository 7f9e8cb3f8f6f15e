use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::Asset;

/// One-time right to mint governance tokens for a deposit
/// PDA: ["claim_ticket", source_account]
#[account]
#[derive(InitSpace)]
pub struct ClaimTicket {
    /// Receives the governance tokens and the ticket rent
    pub owner: Pubkey,

    /// Locked or vest account created by the same deposit
    pub source_account: Pubkey,

    /// Reserve asset backing the deposit
    pub asset: Asset,

    /// Governance amount minted on claim
    pub amount: u64,

    /// Config.claim_delay at creation time
    pub claim_delay: i64,

    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl ClaimTicket {
    pub fn matures_at(&self) -> Result<i64> {
        self.created_at
            .checked_add(self.claim_delay)
            .ok_or(error!(GovCustodyError::MathOverflow))
    }

    pub fn ensure_mature(&self, now: i64) -> Result<()> {
        require!(now >= self.matures_at()?, GovCustodyError::NotMature);
        Ok(())
    }
}
