use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{Auction, AuctionParams};

/// Validates that an amount is greater than zero
pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    Ok(())
}

/// Validates that the price decays (or stays flat), never rises
pub fn validate_price_range(start_price: u64, end_price: u64) -> Result<()> {
    require!(start_price >= end_price, ErrorCode::InvalidPrice);
    Ok(())
}

/// Validates that the auction opens in the future and has a non-empty window
pub fn validate_time_window(start_time: i64, end_time: i64, now: i64) -> Result<()> {
    require!(
        start_time > now && start_time < end_time,
        ErrorCode::InvalidTime
    );
    Ok(())
}

/// Validates all `create_auction` terms. The first failing check wins:
/// SameAsset, InvalidPrice, InvalidTime, InvalidAmount
pub fn validate_auction_params(
    sell_mint: Pubkey,
    buy_mint: Pubkey,
    params: &AuctionParams,
    now: i64,
) -> Result<()> {
    require_keys_neq!(sell_mint, buy_mint, ErrorCode::SameAsset);
    validate_price_range(params.start_price, params.end_price)?;
    validate_time_window(params.start_time, params.end_time, now)?;
    validate_amount(params.sell_amount)?;
    Ok(())
}

/// Validates that the escrow holds the whole lot after the deposit.
/// Mints that withhold a transfer fee deliver less than was sent.
pub fn validate_escrow_funded(escrow_amount: u64, sell_amount: u64) -> Result<()> {
    require!(escrow_amount == sell_amount, ErrorCode::InvalidAmount);
    Ok(())
}

/// Validates a purchase and returns the price it clears at
pub fn validate_purchase(auction: &Auction, max_price: u64, now: i64) -> Result<u64> {
    require!(now >= auction.start_time, ErrorCode::AuctionNotStarted);

    let current_price = auction.current_price(now)?;
    require!(current_price <= max_price, ErrorCode::PriceTooHigh);

    Ok(current_price)
}

/// Validates that `signer` may still pull the lot out of escrow
pub fn validate_withdraw(auction: &Auction, signer: Pubkey, now: i64) -> Result<()> {
    require_keys_eq!(signer, auction.seller, ErrorCode::Unauthorized);
    require!(now < auction.start_time, ErrorCode::AuctionAlreadyStarted);
    Ok(())
}
