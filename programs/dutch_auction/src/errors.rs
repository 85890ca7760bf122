use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Sell mint and buy mint must be different")]
    SameAsset,

    #[msg("Start price must be greater than or equal to end price")]
    InvalidPrice,

    #[msg("Start time must be in the future and before end time")]
    InvalidTime,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Auction has not started yet")]
    AuctionNotStarted,

    #[msg("Current price exceeds max price")]
    PriceTooHigh,

    #[msg("Auction has already started")]
    AuctionAlreadyStarted,

    #[msg("Signer is not the auction seller")]
    Unauthorized,

    /// The record is missing or is not an auction owned by this program.
    #[msg("Auction not found")]
    NotFound,

    #[msg("Arithmetic overflow")]
    Overflow,
}
