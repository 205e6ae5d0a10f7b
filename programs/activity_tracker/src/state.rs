use anchor_lang::prelude::*;
use crate::errors::ActivityError;

pub const LIKE_SEED: &[u8] = b"like";

/// Most targets a single batch_like can carry
pub const MAX_BATCH: usize = 10;

/// Like history for one ordered (sender, target) pair,
/// seeds = ["like", sender, target]
///
/// Only the epoch of the latest accepted like matters for replay protection;
/// once the clock moves past it the record no longer blocks anything, so it is
/// reused rather than a new record being opened per epoch.
#[account]
#[derive(Default)]
pub struct LikeRecord {
    pub sender: Pubkey,
    pub target: Pubkey,
    /// Epoch of the most recent accepted like
    pub epoch: u64,
    /// Likes accepted for this pair across all epochs
    pub total_likes: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl LikeRecord {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // sender
        32 +                     // target
        8 +                      // epoch
        8 +                      // total_likes
        1;                       // bump

    pub fn is_initialized(&self) -> bool {
        self.sender != Pubkey::default()
    }

    pub fn liked_in(&self, epoch: u64) -> bool {
        self.is_initialized() && self.epoch == epoch
    }

    /// Accept a like for `epoch`, rejecting a second one in the same epoch
    pub fn register(&mut self, sender: Pubkey, target: Pubkey, epoch: u64, bump: u8) -> Result<()> {
        require!(!self.liked_in(epoch), ActivityError::DuplicateInEpoch);

        if !self.is_initialized() {
            self.sender = sender;
            self.target = target;
            self.bump = bump;
        }
        self.epoch = epoch;
        self.total_likes = self
            .total_likes
            .checked_add(1)
            .ok_or(ActivityError::CounterOverflow)?;
        Ok(())
    }
}

/// Batch-level checks run before anything is written
pub fn validate_targets(sender: &Pubkey, targets: &[Pubkey]) -> Result<()> {
    require!(!targets.is_empty(), ActivityError::EmptyBatch);
    require!(targets.len() <= MAX_BATCH, ActivityError::BatchTooLarge);

    for (i, target) in targets.iter().enumerate() {
        require_keys_neq!(*target, *sender, ActivityError::SelfInteraction);
        // A repeated target would be a second like in the same epoch
        require!(
            !targets[..i].contains(target),
            ActivityError::DuplicateInEpoch
        );
    }
    Ok(())
}
