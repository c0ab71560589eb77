use anchor_lang::prelude::*;

/// One open offer. The account exists exactly as long as the offer is open;
/// cancel and exchange both close it.
#[account]
pub struct EscrowAccount {
    pub initializer_key: Pubkey,
    pub vault_token_account: Pubkey,
    pub initializer_receive_token_account: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
}

impl EscrowAccount {
    pub const LEN: usize = 32 // initializer_key
        + 32 // vault_token_account
        + 32 // initializer_receive_token_account
        + 8 // initializer_amount
        + 8; // taker_amount

    /// Allocation including the anchor discriminator.
    pub const SPACE: usize = 8 + EscrowAccount::LEN;
}
