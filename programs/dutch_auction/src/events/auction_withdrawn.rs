use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct AuctionWithdrawn {
    pub auction: Pubkey,
    pub seller: Pubkey,
    pub sell_amount: u64,
}
