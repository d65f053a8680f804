use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the vault admin")]
    Unauthorized,
    #[msg("Admin must be a non-default public key")]
    InvalidAdmin,
    #[msg("Recipient table must contain at least one recipient")]
    EmptyRecipients,
    #[msg("Recipient table exceeds the maximum number of recipients")]
    TooManyRecipients,
    #[msg("Recipient and share lists have different lengths")]
    RecipientShareLengthMismatch,
    #[msg("Share must be between 0 and 10000 bps")]
    ShareOutOfRange,
    #[msg("Shares must sum to exactly 10000 bps")]
    InvalidShareTotal,
    #[msg("No balance available to distribute")]
    NothingToDistribute,
    #[msg("Insufficient vault balance for operation")]
    InsufficientBalance,
    #[msg("A distribution is already in progress")]
    ReentrantCall,
    #[msg("Number of recipient accounts does not match the recipient table")]
    RecipientAccountCountMismatch,
    #[msg("Recipient account does not match the recipient table entry")]
    RecipientAccountMismatch,
    #[msg("Recipient account must be writable")]
    RecipientAccountNotWritable,
    #[msg("Recipient token account is invalid for this mint or owner")]
    InvalidRecipientTokenAccount,
    #[msg("Token account mint does not match")]
    MintMismatch,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}

/// Numeric code of an anchor error, for assertions
#[cfg(test)]
pub(crate) fn code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => u32::MAX,
    }
}
