use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

// Re-export at crate root for Anchor's macro expansion
pub use state::{Auction, AuctionParams};

declare_id!("BgU4SppsedWxpVqyAGyRkebCpYAZZoFsyWvNL3kgxT5u");

#[program]
pub mod dutch_auction {
    use super::*;

    /// Create: escrow the lot and open a descending-price auction
    pub fn create_auction(ctx: Context<CreateAuction>, params: AuctionParams) -> Result<()> {
        instructions::create_auction::handler(ctx, params)
    }

    /// Purchase: pay the current price (at most `max_price`) and take the whole lot
    pub fn purchase(ctx: Context<Purchase>, max_price: u64) -> Result<()> {
        instructions::purchase::handler(ctx, max_price)
    }

    /// Withdraw: seller cancels before the start time and reclaims the lot
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }
}
