use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::errors::ErrorCode;
use crate::utils::math::{calculate_current_price, calculate_percent_complete};

/// Escrowed Dutch auction for one lot of `sell_mint`
///
/// PDA Seeds (record):
/// - "auction"
/// - seller
/// - sell_mint
///
/// PDA Seeds (escrow token account, authority = record):
/// - "auction_sell_ata"
/// - record address
///
/// Written once by `create_auction` and never mutated. `purchase` or
/// `withdraw` closes it together with the escrow.
#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct Auction {
    /// Creator, sole authority for withdrawal and recipient of payment + rent
    pub seller: Pubkey,

    /// Token held in escrow
    pub sell_mint: Pubkey,

    /// Token the buyer pays with
    pub buy_mint: Pubkey,

    /// Escrowed lot size (sell mint base units)
    pub sell_amount: u64,

    /// Buy mint base units per whole sell token at `start_time`
    pub start_price: u64,

    /// Floor price, reached at `end_time`
    pub end_price: u64,

    pub start_time: i64,
    pub end_time: i64,

    /// Token program owning both mints and the escrow
    pub token_program: Pubkey,

    /// PDA bump
    pub bump: u8,
}

impl Auction {
    pub const SEED_PREFIX: &'static [u8] = b"auction";
    pub const ESCROW_SEED_PREFIX: &'static [u8] = b"auction_sell_ata";

    /// Account data length, discriminator included. Collaborators filter
    /// program accounts by this exact size.
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 32 + 1;

    pub fn find_address(seller: &Pubkey, sell_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, seller.as_ref(), sell_mint.as_ref()],
            &crate::ID,
        )
    }

    pub fn find_escrow_address(auction: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::ESCROW_SEED_PREFIX, auction.as_ref()], &crate::ID)
    }

    /// Seeds the program signs with as escrow authority
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            Self::SEED_PREFIX,
            self.seller.as_ref(),
            self.sell_mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn status(&self, now: i64) -> AuctionStatus {
        if now < self.start_time {
            AuctionStatus::Pending
        } else if now < self.end_time {
            AuctionStatus::Active
        } else {
            AuctionStatus::Ended
        }
    }

    pub fn current_price(&self, now: i64) -> Result<u64> {
        calculate_current_price(
            self.start_price,
            self.end_price,
            self.start_time,
            self.end_time,
            now,
        )
    }

    /// Price preview for display. Uses the same decay as `purchase`, so a
    /// quote taken at the ledger's clock is exactly what the program charges.
    pub fn quote(&self, now: i64) -> Result<PriceQuote> {
        let status = self.status(now);
        let time_remaining = match status {
            AuctionStatus::Ended => 0,
            AuctionStatus::Pending | AuctionStatus::Active => self
                .end_time
                .checked_sub(now)
                .ok_or(ErrorCode::Overflow)?,
        };

        Ok(PriceQuote {
            status,
            current_price: self.current_price(now)?,
            time_remaining,
            percent_complete: calculate_percent_complete(self.start_time, self.end_time, now)?,
        })
    }

    /// Decodes raw account data fetched off-chain.
    ///
    /// Anything that is not a live auction record (closed account, other
    /// account type) is `NotFound`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        require!(
            data.len() == Self::SIZE && data.starts_with(Self::DISCRIMINATOR),
            ErrorCode::NotFound
        );

        let mut data = data;
        Self::try_deserialize(&mut data)
    }
}

/// Seller-chosen terms passed to `create_auction`
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionParams {
    pub sell_amount: u64,
    pub start_price: u64,
    pub end_price: u64,
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    /// Before `start_time`: price fixed at `start_price`, seller may withdraw
    Pending,
    /// Price decaying, open to buyers
    Active,
    /// Past `end_time`: still purchasable at `end_price`
    Ended,
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuctionStatus::Pending => write!(f, "Pending"),
            AuctionStatus::Active => write!(f, "Active"),
            AuctionStatus::Ended => write!(f, "Ended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub status: AuctionStatus,
    pub current_price: u64,
    /// Seconds until `end_time`
    pub time_remaining: i64,
    pub percent_complete: u8,
}
