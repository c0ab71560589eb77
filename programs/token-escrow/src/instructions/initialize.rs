use anchor_lang::prelude::*;
use anchor_spl::token::{self, SetAuthority, Token, TokenAccount, Transfer};
use spl_token::instruction::AuthorityType;

use crate::authority;
use crate::errors::EscrowError;
use crate::state::EscrowAccount;
use crate::utils::{assert_fresh_vault, assert_token_owner};

#[derive(Accounts)]
#[instruction(initializer_amount: u64, taker_amount: u64)]
pub struct Initialize<'info> {
    #[account(
        mut,
        constraint = initializer_amount > 0 @ EscrowError::InvalidAmount,
        constraint = taker_amount > 0 @ EscrowError::InvalidAmount,
    )]
    pub initializer: Signer<'info>,
    #[account(init, payer = initializer, space = EscrowAccount::SPACE)]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,
    #[account(
        mut,
        constraint = initializer_deposit_token_account.amount >= initializer_amount @ EscrowError::InsufficientFunds
    )]
    pub initializer_deposit_token_account: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,
    pub initializer_receive_token_account: Box<Account<'info, TokenAccount>>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn process_initialize(
    ctx: Context<Initialize>,
    initializer_amount: u64,
    taker_amount: u64,
) -> Result<()> {
    msg!("start initialize");

    // check account infos
    let initializer = ctx.accounts.initializer.key();
    assert_token_owner(&ctx.accounts.initializer_deposit_token_account, &initializer)?;
    assert_token_owner(&ctx.accounts.initializer_receive_token_account, &initializer)?;
    assert_fresh_vault(
        &ctx.accounts.vault_token_account,
        &ctx.accounts.vault_token_account.key(),
        &ctx.accounts.initializer_deposit_token_account,
        &ctx.accounts.initializer_deposit_token_account.key(),
        &initializer,
    )?;

    let escrow_account = &mut ctx.accounts.escrow_account;
    escrow_account.initializer_key = initializer;
    escrow_account.vault_token_account = ctx.accounts.vault_token_account.key();
    escrow_account.initializer_receive_token_account =
        ctx.accounts.initializer_receive_token_account.key();
    escrow_account.initializer_amount = initializer_amount;
    escrow_account.taker_amount = taker_amount;

    msg!("transfer {} to vault", initializer_amount);
    token::transfer(ctx.accounts.into_transfer_to_vault_context(), initializer_amount)?;

    // from here on only the program can move the vault
    let (vault_authority, _vault_authority_bump) = authority::derive(ctx.program_id);
    msg!("set vault authority");
    token::set_authority(
        ctx.accounts.into_set_authority_context(),
        AuthorityType::AccountOwner,
        Some(vault_authority),
    )?;

    msg!("end initialize");
    Ok(())
}

impl<'info> Initialize<'info> {
    fn into_transfer_to_vault_context(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.initializer_deposit_token_account.to_account_info(),
            to: self.vault_token_account.to_account_info(),
            authority: self.initializer.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn into_set_authority_context(&self) -> CpiContext<'_, '_, '_, 'info, SetAuthority<'info>> {
        let cpi_accounts = SetAuthority {
            account_or_mint: self.vault_token_account.to_account_info(),
            current_authority: self.initializer.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
