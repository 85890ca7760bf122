use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, CloseAccount, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::events::AuctionPurchased;
use crate::state::Auction;
use crate::utils::{
    math::calculate_payment,
    validation::{validate_amount, validate_purchase},
};

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Closed on success. A consumed auction fails to load here, so only the
    /// first purchase against a record can land.
    #[account(
        mut,
        close = seller,
        seeds = [
            Auction::SEED_PREFIX,
            auction.seller.as_ref(),
            auction.sell_mint.as_ref()
        ],
        bump = auction.bump,
        has_one = seller,
        has_one = sell_mint,
        has_one = buy_mint,
        has_one = token_program
    )]
    pub auction: Box<Account<'info, Auction>>,

    /// Receives the escrow and auction rent
    #[account(mut)]
    pub seller: SystemAccount<'info>,

    pub sell_mint: Box<InterfaceAccount<'info, Mint>>,
    pub buy_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [Auction::ESCROW_SEED_PREFIX, auction.key().as_ref()],
        bump,
        token::mint = sell_mint,
        token::authority = auction,
        token::token_program = token_program
    )]
    pub escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = sell_mint,
        token::authority = buyer,
        token::token_program = token_program
    )]
    pub buyer_sell_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = buy_mint,
        token::authority = buyer,
        token::token_program = token_program
    )]
    pub buyer_buy_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = buy_mint,
        token::authority = seller,
        token::token_program = token_program
    )]
    pub seller_buy_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<Purchase>, max_price: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let auction = &ctx.accounts.auction;

    let price = validate_purchase(auction, max_price, now)?;
    let payment = calculate_payment(auction.sell_amount, price, ctx.accounts.sell_mint.decimals)?;
    validate_amount(payment)?;

    // 1. Buyer pays the seller
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.buyer_buy_account.to_account_info(),
                mint: ctx.accounts.buy_mint.to_account_info(),
                to: ctx.accounts.seller_buy_account.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        payment,
        ctx.accounts.buy_mint.decimals,
    )?;

    // 2. Escrow releases the lot to the buyer (auction PDA signs)
    let seeds = auction.signer_seeds();
    let signer_seeds: &[&[&[u8]]] = &[&seeds];
    let lot = ctx.accounts.escrow.amount;

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.escrow.to_account_info(),
                mint: ctx.accounts.sell_mint.to_account_info(),
                to: ctx.accounts.buyer_sell_account.to_account_info(),
                authority: auction.to_account_info(),
            },
            signer_seeds,
        ),
        lot,
        ctx.accounts.sell_mint.decimals,
    )?;

    // 3. Close the emptied escrow, rent to seller
    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: auction.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(AuctionPurchased {
        auction: auction.key(),
        buyer: ctx.accounts.buyer.key(),
        seller: auction.seller,
        price,
        payment,
        sell_amount: lot,
    });

    msg!(
        "Auction {} bought by {}: {} @ {} for {}",
        auction.key(),
        ctx.accounts.buyer.key(),
        lot,
        price,
        payment
    );

    Ok(())
}
