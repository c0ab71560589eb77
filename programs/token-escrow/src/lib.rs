use anchor_lang::prelude::*;

pub mod authority;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod traits;
pub mod utils;

pub use instructions::*;

declare_id!("8JG6VdhAyxCdAFpev97azxMMpZayq9ZRqKNd1sgVcwx7");

#[program]
pub mod token_escrow {
    use super::*;

    /// Opens an offer: records the terms, moves `initializer_amount` into the
    /// vault and hands the vault over to the custody authority.
    pub fn initialize(
        ctx: Context<Initialize>,
        initializer_amount: u64,
        taker_amount: u64,
    ) -> Result<()> {
        process_initialize(ctx, initializer_amount, taker_amount)
    }

    /// Returns the vault to the initializer and closes the offer.
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        process_cancel(ctx)
    }

    /// Pays the initializer `taker_amount`, gives the vault to the taker and
    /// closes the offer.
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        process_exchange(ctx)
    }
}
