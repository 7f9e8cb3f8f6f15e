// =============================================================================
// Instructions Module - Governance Custody
// =============================================================================

// Setup and admin
pub mod admin;
pub mod initialize;
pub mod register_user;

// Deposits
pub mod deposit_locked;
pub mod deposit_vest;

// Ticket lifecycle
pub mod burn_locked;
pub mod burn_vest;
pub mod claim;
pub mod redeem;

pub use admin::*;
pub use burn_locked::*;
pub use burn_vest::*;
pub use claim::*;
pub use deposit_locked::*;
pub use deposit_vest::*;
pub use initialize::*;
pub use redeem::*;
pub use register_user::*;
