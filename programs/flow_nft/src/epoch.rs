use anchor_lang::prelude::*;

/// Default epoch length in seconds
pub const DEFAULT_EPOCH_LENGTH: u64 = 60;

/// Epoch containing `unix_timestamp` for a given epoch length.
///
/// Timestamps before the Unix epoch fold into epoch 0. A zero length is
/// rejected when the registry is configured, so it is treated as one second
/// here rather than dividing by zero.
pub fn epoch_at(unix_timestamp: i64, epoch_length: u64) -> u64 {
    let seconds = u64::try_from(unix_timestamp).unwrap_or(0);
    seconds / epoch_length.max(1)
}

/// Epoch of the current cluster time
pub fn current_epoch(epoch_length: u64) -> Result<u64> {
    let clock = Clock::get()?;
    Ok(epoch_at(clock.unix_timestamp, epoch_length))
}
