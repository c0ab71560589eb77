use anchor_lang::error_code;

#[error_code]
pub enum EscrowError {
    // 6000
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("InvalidAmount")]
    InvalidAmount,
    #[msg("InsufficientFunds")]
    InsufficientFunds,
    #[msg("MintMismatch")]
    MintMismatch,
    #[msg("IncorrectTokenAccountOwner")]
    IncorrectTokenAccountOwner,
    // 6005
    #[msg("VaultNotEmpty")]
    VaultNotEmpty,
    #[msg("VaultCloseAuthoritySet")]
    VaultCloseAuthoritySet,
    #[msg("VaultAccountMismatch")]
    VaultAccountMismatch,
    #[msg("ReceiveAccountMismatch")]
    ReceiveAccountMismatch,
    #[msg("InitializerMismatch")]
    InitializerMismatch,
    // 6010
    #[msg("PdaPublicKeyMismatch")]
    PdaPublicKeyMismatch,
}
