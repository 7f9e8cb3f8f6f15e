use anchor_lang::prelude::*;

use crate::error::GovCustodyError;
use crate::state::Asset;

/// Global program configuration
/// PDA: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Only key allowed to change the authority or the parameters below
    pub config_authority: Pubkey,

    /// Governance token mint, PDA ["gov_mint"]
    pub gov_mint: Pubkey,

    /// Reserve mints backing the governance token
    pub primary_mint: Pubkey,
    pub secondary_mint: Pubkey,

    /// Seconds between a deposit and the moment its claim ticket matures
    pub claim_delay: i64,

    /// Seconds between a burn and the moment its redeem ticket matures
    pub redeem_delay: i64,

    /// Vesting parameters copied into every new vest account
    pub cliff_period: i64,
    pub linear_vesting_period: i64,

    /// Set by the first successful initialize call
    pub is_initialized: bool,

    /// PDA bump seeds
    pub bump: u8,
    pub authority_bump: u8,
    pub gov_mint_bump: u8,
    pub primary_vault_bump: u8,
    pub secondary_vault_bump: u8,
}

impl Config {
    pub fn reserve_mint(&self, asset: Asset) -> Pubkey {
        match asset {
            Asset::Primary => self.primary_mint,
            Asset::Secondary => self.secondary_mint,
        }
    }

    pub fn vault_bump(&self, asset: Asset) -> u8 {
        match asset {
            Asset::Primary => self.primary_vault_bump,
            Asset::Secondary => self.secondary_vault_bump,
        }
    }

    /// Overwrite all four time parameters at once.
    /// Outstanding tickets and vests keep the values they were created with.
    pub fn set_params(
        &mut self,
        claim_delay: i64,
        redeem_delay: i64,
        cliff_period: i64,
        linear_vesting_period: i64,
    ) -> Result<()> {
        require!(
            claim_delay >= 0 && redeem_delay >= 0 && cliff_period >= 0 && linear_vesting_period >= 0,
            GovCustodyError::InvalidParams
        );

        self.claim_delay = claim_delay;
        self.redeem_delay = redeem_delay;
        self.cliff_period = cliff_period;
        self.linear_vesting_period = linear_vesting_period;

        Ok(())
    }
}
