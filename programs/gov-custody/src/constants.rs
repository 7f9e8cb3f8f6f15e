// =============================================================================
// Governance Custody Constants
// =============================================================================

// PDA Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const GOV_MINT_SEED: &[u8] = b"gov_mint";
pub const VAULT_SEED: &[u8] = b"vault";
pub const USER_SEED: &[u8] = b"user";
pub const LOCKED_ACCOUNT_SEED: &[u8] = b"locked_account";
pub const VEST_ACCOUNT_SEED: &[u8] = b"vest_account";
pub const CLAIM_TICKET_SEED: &[u8] = b"claim_ticket";
pub const REDEEM_TICKET_SEED: &[u8] = b"redeem_ticket";

// Governance token keeps the primary reserve token's decimals
pub const GOV_DECIMALS: u8 = 6;

// One unit of the secondary reserve asset is worth this many governance base units.
// Secondary-sourced governance amounts convert back to underlying units only
// when they are exact multiples of this value.
pub const SECONDARY_MULTIPLIER: u64 = 1_000_000_000_000;
