use anchor_lang::prelude::*;

#[error_code]
pub enum GovCustodyError {
    // Config Errors (6000-6003)
    #[msg("Config is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized: signer does not own this record")]
    Unauthorized,

    #[msg("Delay and vesting periods must not be negative")]
    InvalidParams,

    #[msg("Invalid authority")]
    InvalidAuthority,

    // Amount Errors (6004-6006)
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Amount exceeds the remaining or unlocked balance")]
    AmountExceedsBalance,

    #[msg("Amount must be a multiple of the secondary asset multiplier")]
    InvalidAmount,

    // Ticket Errors (6007-6008)
    #[msg("Ticket has not matured yet")]
    NotMature,

    #[msg("Record not found or already consumed")]
    NotFound,

    // Math Errors (6009)
    #[msg("Math overflow")]
    MathOverflow,

    // Account Validation Errors (6010-6011)
    #[msg("Reserve mint does not match the configured asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidTokenAccountOwner,
}
