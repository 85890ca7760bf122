//! # Setup
//!
//! Boots a bank with the auction program loaded natively and offers helpers
//! for sending transactions, moving the clock and reading accounts.

use anchor_lang::solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, instruction::Instruction,
    pubkey::Pubkey, system_instruction,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    clock::Clock,
    instruction::InstructionError,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    // Anchor's entry ties the slice lifetime to the account lifetime
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    dutch_auction::entry(program_id, accounts, data)
}

/// Starts a test bank with the auction program registered under its id
pub async fn start() -> ProgramTestContext {
    let program_test = ProgramTest::new(
        "dutch_auction",
        dutch_auction::ID,
        processor!(process_instruction),
    );
    program_test.start_with_context().await
}

/// Signs with the bank payer plus `signers` and processes the instructions
/// as one transaction
pub async fn process(
    test_ctx: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    // Fresh blockhash so a retried transaction is not deduplicated
    let blockhash = test_ctx
        .get_new_latest_blockhash()
        .await
        .unwrap_or_else(|err| panic!("Failed to get blockhash: {err}"));

    let mut all_signers: Vec<&Keypair> = vec![&test_ctx.payer];
    all_signers.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&test_ctx.payer.pubkey()),
        &all_signers,
        blockhash,
    );
    test_ctx.banks_client.process_transaction(tx).await
}

/// Transfers lamports from the bank payer so `to` can pay rent and fees
pub async fn airdrop(test_ctx: &mut ProgramTestContext, to: &Pubkey, lamports: u64) {
    let ix = system_instruction::transfer(&test_ctx.payer.pubkey(), to, lamports);
    process(test_ctx, &[ix], &[])
        .await
        .unwrap_or_else(|err| panic!("Failed to airdrop: {err}"));
}

/// Keypair funded with one SOL
pub async fn funded_keypair(test_ctx: &mut ProgramTestContext) -> Keypair {
    let keypair = Keypair::new();
    airdrop(test_ctx, &keypair.pubkey(), 1_000_000_000).await;
    keypair
}

pub async fn clock(test_ctx: &mut ProgramTestContext) -> Clock {
    test_ctx
        .banks_client
        .get_sysvar::<Clock>()
        .await
        .unwrap_or_else(|err| panic!("Failed to read clock: {err}"))
}

/// Moves the bank's unix timestamp to `unix_timestamp`, keeping the slot
pub async fn set_unix_timestamp(test_ctx: &mut ProgramTestContext, unix_timestamp: i64) {
    let mut new_clock = clock(test_ctx).await;
    new_clock.unix_timestamp = unix_timestamp;
    test_ctx.set_sysvar(&new_clock);
    assert_eq!(clock(test_ctx).await.unix_timestamp, unix_timestamp);
}

pub async fn account_exists(test_ctx: &mut ProgramTestContext, address: &Pubkey) -> bool {
    test_ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap_or_else(|err| panic!("Failed to get account: {err}"))
        .is_some()
}

pub async fn lamports(test_ctx: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    test_ctx
        .banks_client
        .get_balance(*address)
        .await
        .unwrap_or_else(|err| panic!("Failed to get balance: {err}"))
}

/// Asserts that the first instruction failed with the custom `code`
pub fn assert_custom_error(result: Result<(), BanksClientError>, code: u32) {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            0,
            InstructionError::Custom(actual),
        ))) => assert_eq!(actual, code, "unexpected error code"),
        other => panic!("Expected custom error {code}, got {other:?}"),
    }
}

/// Program error code as reported by the runtime
pub fn program_error(code: dutch_auction::errors::ErrorCode) -> u32 {
    code as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}

/// Framework error code as reported by the runtime
pub fn framework_error(code: anchor_lang::error::ErrorCode) -> u32 {
    code as u32
}
