use crate::errors::EscrowError;
use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

pub fn assert_token_owner(token_account: &TokenAccount, owner: &Pubkey) -> Result<()> {
    require_keys_eq!(
        token_account.owner,
        *owner,
        EscrowError::IncorrectTokenAccountOwner
    );
    Ok(())
}

pub fn assert_same_mint(token_account: &TokenAccount, other: &TokenAccount) -> Result<()> {
    require_keys_eq!(token_account.mint, other.mint, EscrowError::MintMismatch);
    Ok(())
}

/// A vault must be an empty account the initializer still owns, so that after
/// the deposit its balance is exactly the offered amount and only the custody
/// authority can close it.
pub fn assert_fresh_vault(
    vault: &TokenAccount,
    vault_key: &Pubkey,
    deposit: &TokenAccount,
    deposit_key: &Pubkey,
    initializer: &Pubkey,
) -> Result<()> {
    require!(vault_key != deposit_key, EscrowError::VaultAccountMismatch);
    assert_token_owner(vault, initializer)?;
    assert_same_mint(vault, deposit)?;
    require_eq!(vault.amount, 0, EscrowError::VaultNotEmpty);
    require!(
        vault.close_authority.is_none(),
        EscrowError::VaultCloseAuthoritySet
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_option::COption;
    use anchor_lang::solana_program::program_pack::Pack;
    use anchor_lang::AccountDeserialize;

    fn token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> spl_token::state::Account {
        spl_token::state::Account {
            mint,
            owner,
            amount,
            state: spl_token::state::AccountState::Initialized,
            ..spl_token::state::Account::default()
        }
    }

    fn to_anchor(account: spl_token::state::Account) -> TokenAccount {
        let mut data = vec![0u8; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(account, &mut data).unwrap();
        TokenAccount::try_deserialize(&mut data.as_slice()).unwrap()
    }

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match ProgramError::from(err) {
            ProgramError::Custom(code) => code,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn fresh_vault_is_accepted() {
        let mint = Pubkey::new_unique();
        let initializer = Pubkey::new_unique();
        let vault = to_anchor(token_account(mint, initializer, 0));
        let deposit = to_anchor(token_account(mint, initializer, 50));

        assert_fresh_vault(
            &vault,
            &Pubkey::new_unique(),
            &deposit,
            &Pubkey::new_unique(),
            &initializer,
        )
        .unwrap();
    }

    #[test]
    fn funded_vault_is_rejected() {
        let mint = Pubkey::new_unique();
        let initializer = Pubkey::new_unique();
        let vault = to_anchor(token_account(mint, initializer, 1));
        let deposit = to_anchor(token_account(mint, initializer, 50));

        let err = assert_fresh_vault(
            &vault,
            &Pubkey::new_unique(),
            &deposit,
            &Pubkey::new_unique(),
            &initializer,
        )
        .unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::VaultNotEmpty));
    }

    #[test]
    fn vault_with_close_authority_is_rejected() {
        let mint = Pubkey::new_unique();
        let initializer = Pubkey::new_unique();
        let mut raw = token_account(mint, initializer, 0);
        raw.close_authority = COption::Some(initializer);
        let vault = to_anchor(raw);
        let deposit = to_anchor(token_account(mint, initializer, 50));

        let err = assert_fresh_vault(
            &vault,
            &Pubkey::new_unique(),
            &deposit,
            &Pubkey::new_unique(),
            &initializer,
        )
        .unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(EscrowError::VaultCloseAuthoritySet)
        );
    }

    #[test]
    fn vault_of_another_mint_is_rejected() {
        let initializer = Pubkey::new_unique();
        let vault = to_anchor(token_account(Pubkey::new_unique(), initializer, 0));
        let deposit = to_anchor(token_account(Pubkey::new_unique(), initializer, 50));

        let err = assert_fresh_vault(
            &vault,
            &Pubkey::new_unique(),
            &deposit,
            &Pubkey::new_unique(),
            &initializer,
        )
        .unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::MintMismatch));
    }

    #[test]
    fn deposit_account_cannot_double_as_vault() {
        let mint = Pubkey::new_unique();
        let initializer = Pubkey::new_unique();
        let account = to_anchor(token_account(mint, initializer, 0));
        let key = Pubkey::new_unique();

        let err = assert_fresh_vault(&account, &key, &account, &key, &initializer).unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::VaultAccountMismatch));
    }

    #[test]
    fn foreign_vault_is_rejected() {
        let mint = Pubkey::new_unique();
        let initializer = Pubkey::new_unique();
        let vault = to_anchor(token_account(mint, Pubkey::new_unique(), 0));
        let deposit = to_anchor(token_account(mint, initializer, 50));

        let err = assert_fresh_vault(
            &vault,
            &Pubkey::new_unique(),
            &deposit,
            &Pubkey::new_unique(),
            &initializer,
        )
        .unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(EscrowError::IncorrectTokenAccountOwner)
        );
    }
}
