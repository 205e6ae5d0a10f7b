use anchor_lang::prelude::*;
use flow_nft::epoch::current_epoch;
use flow_nft::state::{RegistryConfig, REGISTRY_SEED};
use crate::state::{LikeRecord, LIKE_SEED};

#[derive(Accounts)]
#[instruction(from: Pubkey, target: Pubkey)]
pub struct ReadLike<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump,
        seeds::program = flow_nft::ID,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// CHECK: May not exist yet; only deserialized when owned by this program
    #[account(
        seeds = [LIKE_SEED, from.as_ref(), target.as_ref()],
        bump,
    )]
    pub like_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadEpoch<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump,
        seeds::program = flow_nft::ID,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
}

pub fn has_liked_in_epoch(ctx: Context<ReadLike>) -> Result<bool> {
    let info = ctx.accounts.like_record.to_account_info();
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(false);
    }

    let record = LikeRecord::try_deserialize(&mut &info.try_borrow_data()?[..])?;
    let epoch = current_epoch(ctx.accounts.registry_config.epoch_length)?;
    Ok(record.liked_in(epoch))
}

pub fn get_current_epoch(ctx: Context<ReadEpoch>) -> Result<u64> {
    current_epoch(ctx.accounts.registry_config.epoch_length)
}
