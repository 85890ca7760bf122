use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Calculates the acceptable price of a linearly decaying auction at `now`.
///
/// - before `start_time`: `start_price`
/// - from `end_time` on: `end_price`
/// - in between: `start_price - (start_price - end_price) × elapsed / duration`
///
/// The product is taken in u128 and divided once, so every caller gets the same
/// price to the unit for the same timestamp.
///
/// Example: 2_000 → 1_000 over 600s, 300s in = 2_000 - 1_000 × 300 / 600 = 1_500
pub fn calculate_current_price(
    start_price: u64,
    end_price: u64,
    start_time: i64,
    end_time: i64,
    now: i64,
) -> Result<u64> {
    if now < start_time {
        return Ok(start_price);
    }

    if now >= end_time {
        return Ok(end_price);
    }

    let elapsed = now
        .checked_sub(start_time)
        .ok_or(ErrorCode::Overflow)?;
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(ErrorCode::Overflow)?;
    let price_range = start_price
        .checked_sub(end_price)
        .ok_or(ErrorCode::Overflow)?;

    let elapsed = u128::try_from(elapsed).map_err(|_| error!(ErrorCode::Overflow))?;
    let duration = u128::try_from(duration).map_err(|_| error!(ErrorCode::Overflow))?;

    let price_decrease = (price_range as u128)
        .checked_mul(elapsed)
        .ok_or(ErrorCode::Overflow)?
        .checked_div(duration)
        .ok_or(ErrorCode::Overflow)?;
    let price_decrease = u64::try_from(price_decrease).map_err(|_| error!(ErrorCode::Overflow))?;

    let price = start_price
        .checked_sub(price_decrease)
        .ok_or(ErrorCode::Overflow)?;

    Ok(price)
}

/// Calculates the buy-asset payment for the whole lot at `price`
/// Formula: (sell_amount × price) / 10^sell_decimals
///
/// Prices are quoted per whole sell token, so 1 token (9 decimals) at
/// 1_500_000_000 costs 1_500_000_000 raw units of the buy mint.
pub fn calculate_payment(sell_amount: u64, price: u64, sell_decimals: u8) -> Result<u64> {
    let scale = 10_u128
        .checked_pow(u32::from(sell_decimals))
        .ok_or(ErrorCode::Overflow)?;

    let payment = (sell_amount as u128)
        .checked_mul(price as u128)
        .ok_or(ErrorCode::Overflow)?
        .checked_div(scale)
        .ok_or(ErrorCode::Overflow)?;

    u64::try_from(payment).map_err(|_| error!(ErrorCode::Overflow))
}

/// Share of the auction window that has elapsed, in whole percent (0..=100)
pub fn calculate_percent_complete(start_time: i64, end_time: i64, now: i64) -> Result<u8> {
    if now < start_time {
        return Ok(0);
    }

    if now >= end_time {
        return Ok(100);
    }

    let elapsed = now
        .checked_sub(start_time)
        .ok_or(ErrorCode::Overflow)?;
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(ErrorCode::Overflow)?;

    let percent = i128::from(elapsed)
        .checked_mul(100)
        .ok_or(ErrorCode::Overflow)?
        .checked_div(i128::from(duration))
        .ok_or(ErrorCode::Overflow)?;

    u8::try_from(percent).map_err(|_| error!(ErrorCode::Overflow))
}
