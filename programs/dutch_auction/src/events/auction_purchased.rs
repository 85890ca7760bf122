use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct AuctionPurchased {
    pub auction: Pubkey,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    /// Per-token price the auction cleared at
    pub price: u64,
    /// Buy mint amount paid to the seller
    pub payment: u64,
    pub sell_amount: u64,
}
