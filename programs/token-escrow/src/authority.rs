//! The custody authority: a single program-derived address that owns every
//! vault. It has no private key; the program signs for it with the seed below.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::EscrowError;

pub const ESCROW_PDA_SEED: &[u8] = b"escrow";

/// Derives the custody authority address and its bump for `program_id`.
pub fn derive(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_PDA_SEED], program_id)
}

/// Proof that the custody authority was verified for this instruction.
///
/// Only built from the bump anchor found while checking the `vault_authority`
/// seeds, and only handed to the vault release path.
pub struct VaultAuthoritySigner {
    bump: [u8; 1],
}

impl VaultAuthoritySigner {
    pub(crate) fn from_bumps(bumps: &BTreeMap<String, u8>) -> Result<Self> {
        let bump = bumps
            .get("vault_authority")
            .copied()
            .ok_or(EscrowError::PdaPublicKeyMismatch)?;
        Ok(Self { bump: [bump] })
    }

    pub(crate) fn seeds(&self) -> [&[u8]; 2] {
        [ESCROW_PDA_SEED, &self.bump]
    }
}
