use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    authority::{VaultAuthoritySigner, ESCROW_PDA_SEED},
    errors::EscrowError,
    state::EscrowAccount,
    traits::VaultRelease,
    utils::{assert_same_mint, assert_token_owner},
};

// Cancel is terminal: a second cancel or an exchange racing it finds the escrow account closed.
#[derive(Accounts)]
pub struct Cancel<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,
    #[account(
        mut,
        constraint = escrow_account.initializer_key == initializer.key() @ EscrowError::Unauthorized,
        constraint = escrow_account.vault_token_account == vault_token_account.key() @ EscrowError::VaultAccountMismatch,
        close = initializer // return the rent to the initializer
    )]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,
    #[account(mut)]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub initializer_deposit_token_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: only used as the signing authority of the vault, address checked by seeds
    #[account(seeds = [ESCROW_PDA_SEED], bump)]
    pub vault_authority: AccountInfo<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn process_cancel(ctx: Context<Cancel>) -> Result<()> {
    msg!("start cancel");

    assert_token_owner(
        &ctx.accounts.initializer_deposit_token_account,
        &ctx.accounts.initializer.key(),
    )?;
    assert_same_mint(
        &ctx.accounts.initializer_deposit_token_account,
        &ctx.accounts.vault_token_account,
    )?;

    let signer = VaultAuthoritySigner::from_bumps(&ctx.bumps)?;
    let refund = ctx.accounts.vault_token_account.amount;
    ctx.accounts.release_vault(
        ctx.accounts.initializer_deposit_token_account.to_account_info(),
        refund,
        &signer,
    )?;

    msg!("end cancel");
    Ok(())
}

impl<'info> VaultRelease<'info> for Cancel<'info> {
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
