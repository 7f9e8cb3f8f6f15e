pub mod asset;
pub mod claim_ticket;
pub mod config;
pub mod locked_account;
pub mod record;
pub mod redeem_ticket;
pub mod user;
pub mod vest_account;

pub use asset::*;
pub use claim_ticket::*;
pub use config::*;
pub use locked_account::*;
pub use record::*;
pub use redeem_ticket::*;
pub use user::*;
pub use vest_account::*;
