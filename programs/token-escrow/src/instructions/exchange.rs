use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    authority::{VaultAuthoritySigner, ESCROW_PDA_SEED},
    errors::EscrowError,
    state::EscrowAccount,
    traits::VaultRelease,
};

#[derive(Accounts)]
pub struct Exchange<'info> {
    pub taker: Signer<'info>,
    #[account(mut)]
    pub initializer: SystemAccount<'info>,
    #[account(
        mut,
        constraint = taker_deposit_token_account.mint == initializer_receive_token_account.mint @ EscrowError::MintMismatch,
        constraint = taker_deposit_token_account.amount >= escrow_account.taker_amount @ EscrowError::InsufficientFunds
    )]
    pub taker_deposit_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = taker_receive_token_account.mint == vault_token_account.mint @ EscrowError::MintMismatch
    )]
    pub taker_receive_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = escrow_account.initializer_key == initializer.key() @ EscrowError::InitializerMismatch,
        constraint = escrow_account.vault_token_account == vault_token_account.key() @ EscrowError::VaultAccountMismatch,
        constraint = escrow_account.initializer_receive_token_account == initializer_receive_token_account.key() @ EscrowError::ReceiveAccountMismatch,
        close = initializer
    )]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,
    #[account(mut)]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub initializer_receive_token_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: only used as the signing authority of the vault, address checked by seeds
    #[account(seeds = [ESCROW_PDA_SEED], bump)]
    pub vault_authority: AccountInfo<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn process_exchange(ctx: Context<Exchange>) -> Result<()> {
    msg!("start exchange");

    let signer = VaultAuthoritySigner::from_bumps(&ctx.bumps)?;
    let taker_amount = ctx.accounts.escrow_account.taker_amount;
    let vault_amount = ctx.accounts.vault_token_account.amount;

    // initializer gets paid first; if this leg fails nothing has left the vault
    msg!("transfer {} to initializer", taker_amount);
    token::transfer(ctx.accounts.into_transfer_to_initializer_context(), taker_amount)?;

    ctx.accounts.release_vault(
        ctx.accounts.taker_receive_token_account.to_account_info(),
        vault_amount,
        &signer,
    )?;

    msg!("end exchange");
    Ok(())
}

impl<'info> Exchange<'info> {
    fn into_transfer_to_initializer_context(
        &self,
    ) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.taker_deposit_token_account.to_account_info(),
            to: self.initializer_receive_token_account.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}

impl<'info> VaultRelease<'info> for Exchange<'info> {
    fn vault_token_account(&self) -> AccountInfo<'info> {
        self.vault_token_account.to_account_info()
    }

    fn vault_authority(&self) -> AccountInfo<'info> {
        self.vault_authority.clone()
    }

    fn initializer(&self) -> AccountInfo<'info> {
        self.initializer.to_account_info()
    }

    fn token_program(&self) -> AccountInfo<'info> {
        self.token_program.to_account_info()
    }
}
