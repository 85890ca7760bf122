use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct AuctionCreated {
    pub auction: Pubkey,
    pub seller: Pubkey,
    pub sell_mint: Pubkey,
    pub buy_mint: Pubkey,
    pub sell_amount: u64,
    pub start_price: u64,
    pub end_price: u64,
    pub start_time: i64,
    pub end_time: i64,
}
