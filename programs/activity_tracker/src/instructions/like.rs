use anchor_lang::prelude::*;
use flow_nft::epoch::current_epoch;
use flow_nft::program::FlowNft;
use flow_nft::recorder::RecorderCpi;
use flow_nft::state::{is_minted, InteractionKind, RegistryConfig, IDENTITY_SEED, REGISTRY_SEED};
use flow_nft::RECORDER_SEED;
use crate::errors::ActivityError;
use crate::events::Liked;
use crate::state::{LikeRecord, LIKE_SEED};

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct Like<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// The sender's FlowNFT identity
    /// CHECK: Address checked by seeds; existence checked in handler (NotRegistered)
    #[account(
        mut,
        seeds = [IDENTITY_SEED, sender.key().as_ref()],
        bump,
        seeds::program = flow_nft::ID,
    )]
    pub sender_identity: UncheckedAccount<'info>,

    /// The target's FlowNFT identity
    /// CHECK: Address checked by seeds; the registry rejects unminted targets
    #[account(
        mut,
        seeds = [IDENTITY_SEED, target.as_ref()],
        bump,
        seeds::program = flow_nft::ID,
    )]
    pub target_identity: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = sender,
        space = LikeRecord::SIZE,
        seeds = [LIKE_SEED, sender.key().as_ref(), target.as_ref()],
        bump,
    )]
    pub like_record: Account<'info, LikeRecord>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump,
        seeds::program = flow_nft::ID,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// CHECK: This program's signing PDA for registry updates
    #[account(
        seeds = [RECORDER_SEED],
        bump,
    )]
    pub recorder: UncheckedAccount<'info>,

    pub flow_nft_program: Program<'info, FlowNft>,
    pub system_program: Program<'info, System>,
}

impl<'info> Like<'info> {
    pub fn registry(&self, recorder_bump: u8) -> RecorderCpi<'info> {
        RecorderCpi {
            flow_nft_program: self.flow_nft_program.to_account_info(),
            config: self.registry_config.to_account_info(),
            recorder: self.recorder.to_account_info(),
            recorder_bump,
        }
    }
}

pub fn handler(ctx: Context<Like>, target: Pubkey) -> Result<()> {
    let sender = ctx.accounts.sender.key();

    require!(
        is_minted(&ctx.accounts.sender_identity.to_account_info()),
        ActivityError::NotRegistered
    );
    require_keys_neq!(target, sender, ActivityError::SelfInteraction);

    let epoch = current_epoch(ctx.accounts.registry_config.epoch_length)?;

    ctx.accounts
        .like_record
        .register(sender, target, epoch, ctx.bumps.like_record)?;

    let registry = ctx.accounts.registry(ctx.bumps.recorder);
    registry.record(
        ctx.accounts.sender_identity.to_account_info(),
        InteractionKind::LikeSent,
    )?;
    registry.record(
        ctx.accounts.target_identity.to_account_info(),
        InteractionKind::LikeReceived,
    )?;

    emit!(Liked {
        from: sender,
        target,
        epoch,
    });

    msg!("{} liked {} in epoch {}", sender, target, epoch);

    Ok(())
}
