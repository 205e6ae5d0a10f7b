use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("5L9Sec7rctaTbU26igMMVkZmN5VTcpXVq6EaSxqJpAKB");

#[program]
pub mod activity_tracker {
    use super::*;

    // === Likes ===

    /// Like another FlowNFT holder, at most once per pair per epoch
    pub fn like(ctx: Context<Like>, target: Pubkey) -> Result<()> {
        instructions::like::handler(ctx, target)
    }

    /// Like several holders at once; any failing target aborts the whole batch
    pub fn batch_like<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchLike<'info>>,
        targets: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::batch_like::handler(ctx, targets)
    }

    // === Views ===

    pub fn has_liked_in_epoch(
        ctx: Context<ReadLike>,
        _from: Pubkey,
        _target: Pubkey,
    ) -> Result<bool> {
        instructions::read_likes::has_liked_in_epoch(ctx)
    }

    pub fn get_current_epoch(ctx: Context<ReadEpoch>) -> Result<u64> {
        instructions::read_likes::get_current_epoch(ctx)
    }
}
