use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Transfer};

use crate::authority::VaultAuthoritySigner;

/// Shared by the two instructions that resolve an escrow. Both drain the vault
/// to a recipient and close it, with the rent going back to the initializer.
pub trait VaultRelease<'info> {
    fn vault_token_account(&self) -> AccountInfo<'info>;
    fn vault_authority(&self) -> AccountInfo<'info>;
    fn initializer(&self) -> AccountInfo<'info>;
    fn token_program(&self) -> AccountInfo<'info>;

    fn into_transfer_from_vault_context(
        &self,
        recipient: AccountInfo<'info>,
    ) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.vault_token_account(),
            to: recipient,
            authority: self.vault_authority(),
        };
        CpiContext::new(self.token_program(), cpi_accounts)
    }

    fn into_close_vault_context(&self) -> CpiContext<'_, '_, '_, 'info, CloseAccount<'info>> {
        let cpi_accounts = CloseAccount {
            account: self.vault_token_account(),
            destination: self.initializer(),
            authority: self.vault_authority(),
        };
        CpiContext::new(self.token_program(), cpi_accounts)
    }

    /// Moves `amount` out of the vault to `recipient`, then closes the vault.
    /// This is the only place the custody authority signs.
    fn release_vault(
        &self,
        recipient: AccountInfo<'info>,
        amount: u64,
        signer: &VaultAuthoritySigner,
    ) -> Result<()> {
        let seeds = signer.seeds();

        msg!("transfer {} out of vault", amount);
        token::transfer(
            self.into_transfer_from_vault_context(recipient)
                .with_signer(&[&seeds[..]]),
            amount,
        )?;

        msg!("close vault");
        token::close_account(self.into_close_vault_context().with_signer(&[&seeds[..]]))
    }
}
