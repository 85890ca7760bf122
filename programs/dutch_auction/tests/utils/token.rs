//! # Token
//!
//! SPL Token fixtures: mints owned by the bank payer and plain token accounts.

use anchor_lang::solana_program::{pubkey::Pubkey, system_instruction};
use anchor_lang::AccountDeserialize;
use anchor_spl::token::{spl_token, TokenAccount};
use solana_program_test::ProgramTestContext;
use solana_sdk::{signature::Keypair, signer::Signer};

use super::setup::process;

pub const MINT_SIZE: usize = 82;
pub const TOKEN_ACCOUNT_SIZE: usize = 165;
pub const DECIMALS: u8 = 9;

async fn create_owned_account(
    test_ctx: &mut ProgramTestContext,
    space: usize,
) -> (Keypair, anchor_lang::solana_program::instruction::Instruction) {
    let rent = test_ctx
        .banks_client
        .get_rent()
        .await
        .unwrap_or_else(|err| panic!("Failed to get rent: {err}"));
    let account = Keypair::new();
    let ix = system_instruction::create_account(
        &test_ctx.payer.pubkey(),
        &account.pubkey(),
        rent.minimum_balance(space),
        space as u64,
        &spl_token::ID,
    );
    (account, ix)
}

/// Creates a mint with `DECIMALS` decimals whose authority is the bank payer
pub async fn create_mint(test_ctx: &mut ProgramTestContext) -> Pubkey {
    let (mint, create_ix) = create_owned_account(test_ctx, MINT_SIZE).await;
    let init_ix = spl_token::instruction::initialize_mint2(
        &spl_token::ID,
        &mint.pubkey(),
        &test_ctx.payer.pubkey(),
        None,
        DECIMALS,
    )
    .unwrap_or_else(|err| panic!("Failed to build initialize_mint2: {err}"));

    process(test_ctx, &[create_ix, init_ix], &[&mint])
        .await
        .unwrap_or_else(|err| panic!("Failed to create mint: {err}"));
    mint.pubkey()
}

/// Creates an empty token account of `mint` owned by `owner`
pub async fn create_token_account(
    test_ctx: &mut ProgramTestContext,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Pubkey {
    let (account, create_ix) = create_owned_account(test_ctx, TOKEN_ACCOUNT_SIZE).await;
    let init_ix =
        spl_token::instruction::initialize_account3(&spl_token::ID, &account.pubkey(), mint, owner)
            .unwrap_or_else(|err| panic!("Failed to build initialize_account3: {err}"));

    process(test_ctx, &[create_ix, init_ix], &[&account])
        .await
        .unwrap_or_else(|err| panic!("Failed to create token account: {err}"));
    account.pubkey()
}

pub async fn mint_to(
    test_ctx: &mut ProgramTestContext,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
) {
    let ix = spl_token::instruction::mint_to(
        &spl_token::ID,
        mint,
        account,
        &test_ctx.payer.pubkey(),
        &[],
        amount,
    )
    .unwrap_or_else(|err| panic!("Failed to build mint_to: {err}"));

    process(test_ctx, &[ix], &[])
        .await
        .unwrap_or_else(|err| panic!("Failed to mint: {err}"));
}

/// Token balance of `address`, panicking if the account is gone
pub async fn token_balance(test_ctx: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    let account = test_ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap_or_else(|err| panic!("Failed to get token account: {err}"))
        .unwrap_or_else(|| panic!("Token account {address} does not exist"));
    TokenAccount::try_deserialize(&mut account.data.as_slice())
        .unwrap_or_else(|err| panic!("Failed to decode token account: {err}"))
        .amount
}
