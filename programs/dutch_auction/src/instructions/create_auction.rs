use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use crate::events::AuctionCreated;
use crate::state::{Auction, AuctionParams};
use crate::utils::validation::{validate_auction_params, validate_escrow_funded};

#[derive(Accounts)]
pub struct CreateAuction<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(mint::token_program = token_program)]
    pub sell_mint: InterfaceAccount<'info, Mint>,

    #[account(mint::token_program = token_program)]
    pub buy_mint: InterfaceAccount<'info, Mint>,

    /// One open auction per (seller, sell_mint); a second create fails on init
    #[account(
        init,
        payer = seller,
        space = Auction::SIZE,
        seeds = [
            Auction::SEED_PREFIX,
            seller.key().as_ref(),
            sell_mint.key().as_ref()
        ],
        bump
    )]
    pub auction: Account<'info, Auction>,

    /// Auction escrow (PDA owned by auction)
    #[account(
        init,
        payer = seller,
        seeds = [Auction::ESCROW_SEED_PREFIX, auction.key().as_ref()],
        bump,
        token::mint = sell_mint,
        token::authority = auction,
        token::token_program = token_program
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = sell_mint,
        token::authority = seller,
        token::token_program = token_program
    )]
    pub seller_sell_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateAuction>, params: AuctionParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    validate_auction_params(
        ctx.accounts.sell_mint.key(),
        ctx.accounts.buy_mint.key(),
        &params,
        now,
    )?;

    // Lock the lot in escrow
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.seller_sell_account.to_account_info(),
                mint: ctx.accounts.sell_mint.to_account_info(),
                to: ctx.accounts.escrow.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
            },
        ),
        params.sell_amount,
        ctx.accounts.sell_mint.decimals,
    )?;

    ctx.accounts.escrow.reload()?;
    validate_escrow_funded(ctx.accounts.escrow.amount, params.sell_amount)?;

    let auction = &mut ctx.accounts.auction;
    auction.seller = ctx.accounts.seller.key();
    auction.sell_mint = ctx.accounts.sell_mint.key();
    auction.buy_mint = ctx.accounts.buy_mint.key();
    auction.sell_amount = params.sell_amount;
    auction.start_price = params.start_price;
    auction.end_price = params.end_price;
    auction.start_time = params.start_time;
    auction.end_time = params.end_time;
    auction.token_program = ctx.accounts.token_program.key();
    auction.bump = ctx.bumps.auction;

    emit!(AuctionCreated {
        auction: auction.key(),
        seller: auction.seller,
        sell_mint: auction.sell_mint,
        buy_mint: auction.buy_mint,
        sell_amount: auction.sell_amount,
        start_price: auction.start_price,
        end_price: auction.end_price,
        start_time: auction.start_time,
        end_time: auction.end_time,
    });

    msg!(
        "Auction {} created: {} of {} priced {} -> {} ({} to {})",
        auction.key(),
        auction.sell_amount,
        auction.sell_mint,
        auction.start_price,
        auction.end_price,
        auction.start_time,
        auction.end_time
    );

    Ok(())
}
