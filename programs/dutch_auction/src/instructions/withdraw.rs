use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, CloseAccount, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::events::AuctionWithdrawn;
use crate::state::Auction;
use crate::utils::validation::validate_withdraw;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    /// Seeds come from the record itself so a foreign signer reaches the
    /// handler and is rejected as Unauthorized
    #[account(
        mut,
        close = seller,
        seeds = [
            Auction::SEED_PREFIX,
            auction.seller.as_ref(),
            auction.sell_mint.as_ref()
        ],
        bump = auction.bump,
        has_one = sell_mint,
        has_one = token_program
    )]
    pub auction: Account<'info, Auction>,

    pub sell_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
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
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let auction = &ctx.accounts.auction;

    validate_withdraw(auction, ctx.accounts.seller.key(), now)?;

    let seeds = auction.signer_seeds();
    let signer_seeds: &[&[&[u8]]] = &[&seeds];
    let lot = ctx.accounts.escrow.amount;

    // Return escrowed tokens
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.escrow.to_account_info(),
                mint: ctx.accounts.sell_mint.to_account_info(),
                to: ctx.accounts.seller_sell_account.to_account_info(),
                authority: auction.to_account_info(),
            },
            signer_seeds,
        ),
        lot,
        ctx.accounts.sell_mint.decimals,
    )?;

    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: auction.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(AuctionWithdrawn {
        auction: auction.key(),
        seller: auction.seller,
        sell_amount: lot,
    });

    msg!("Auction {} withdrawn, {} returned to seller", auction.key(), lot);

    Ok(())
}
