use anchor_lang::prelude::*;

#[error_code]
pub enum FlowNftError {
    #[msg("Already minted: this address already holds a FlowNFT")]
    AlreadyRegistered,

    #[msg("Unknown identity: subject has not minted a FlowNFT")]
    UnknownIdentity,

    #[msg("Unauthorized: caller is not a bound recorder module")]
    Unauthorized,

    #[msg("Unknown token: identifier was never minted")]
    UnknownToken,

    #[msg("Recorder already bound: recorder modules can only be bound once")]
    RecorderAlreadyBound,

    #[msg("Invalid recorder: cannot bind the zero address as a recorder")]
    InvalidRecorder,

    #[msg("Invalid thresholds: need 0 < active threshold < burning threshold")]
    InvalidThresholds,

    #[msg("Invalid epoch length: must be greater than zero")]
    InvalidEpochLength,

    #[msg("Invalid delta: interaction increments must be greater than zero")]
    InvalidDelta,

    #[msg("Counter overflow")]
    CounterOverflow,
}
