use anchor_lang::prelude::*;

use crate::constants::SECONDARY_MULTIPLIER;
use crate::error::GovCustodyError;

/// Which reserve token backs a deposit, lock, vest or ticket.
/// Borsh lays it out as a single-byte discriminant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, InitSpace)]
pub enum Asset {
    /// Converts to governance tokens 1:1
    Primary,
    /// Converts to governance tokens at SECONDARY_MULTIPLIER:1
    Secondary,
}

impl Asset {
    pub fn is_secondary(self) -> bool {
        self == Asset::Secondary
    }

    /// Governance base units credited for `raw_amount` reserve base units
    pub fn to_governance_amount(self, raw_amount: u64) -> Result<u64> {
        match self {
            Asset::Primary => Ok(raw_amount),
            Asset::Secondary => raw_amount
                .checked_mul(SECONDARY_MULTIPLIER)
                .ok_or(error!(GovCustodyError::MathOverflow)),
        }
    }

    /// Reserve base units released for burning `governance_amount`.
    /// Secondary amounts must divide evenly; nothing is rounded away.
    pub fn to_underlying_amount(self, governance_amount: u64) -> Result<u64> {
        match self {
            Asset::Primary => Ok(governance_amount),
            Asset::Secondary => {
                require!(
                    governance_amount % SECONDARY_MULTIPLIER == 0,
                    GovCustodyError::InvalidAmount
                );
                Ok(governance_amount / SECONDARY_MULTIPLIER)
            }
        }
    }
}
