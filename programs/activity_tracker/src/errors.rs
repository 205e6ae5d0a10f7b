use anchor_lang::prelude::*;

#[error_code]
pub enum ActivityError {
    #[msg("Not registered: must own a FlowNFT to like")]
    NotRegistered,

    #[msg("Self interaction: cannot like yourself")]
    SelfInteraction,

    #[msg("Duplicate in epoch: already liked this user this epoch")]
    DuplicateInEpoch,

    #[msg("Empty batch: provide at least one target")]
    EmptyBatch,

    #[msg("Batch too large")]
    BatchTooLarge,

    #[msg("Invalid remaining accounts: expected [target identity, like record] per target")]
    InvalidRemainingAccounts,

    #[msg("Counter overflow")]
    CounterOverflow,
}
