use anchor_lang::prelude::*;

#[error_code]
pub enum TipError {
    #[msg("Tip amount too small: below the configured minimum")]
    BelowMinimum,

    #[msg("Self interaction: cannot tip yourself")]
    SelfInteraction,

    #[msg("Value mismatch: attached value must equal the sum of amounts")]
    ValueMismatch,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Length mismatch: targets and amounts must have the same length")]
    LengthMismatch,

    #[msg("Empty batch: provide at least one target")]
    EmptyBatch,

    #[msg("Batch too large")]
    BatchTooLarge,

    #[msg("Duplicate target: each target may appear once per batch")]
    DuplicateTarget,

    #[msg("Invalid remaining accounts: expected [target ledger, target identity] per target")]
    InvalidRemainingAccounts,

    #[msg("Invalid minimum: minimum tip must be greater than zero")]
    InvalidMinimum,

    #[msg("Unauthorized: signer is not the tip module authority")]
    Unauthorized,

    #[msg("Amount overflow")]
    AmountOverflow,

    #[msg("Vault holds less than the recorded custody")]
    InsufficientVaultBalance,
}
