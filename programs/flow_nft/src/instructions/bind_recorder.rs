use anchor_lang::prelude::*;
use crate::errors::FlowNftError;
use crate::events::RecorderBound;
use crate::state::{RecorderSlot, RegistryConfig, RECORDER_SEED, REGISTRY_SEED};

#[derive(Accounts)]
pub struct BindRecorder<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
        has_one = admin @ FlowNftError::Unauthorized,
    )]
    pub config: Account<'info, RegistryConfig>,
}

pub fn bind_activity_tracker(ctx: Context<BindRecorder>, program: Pubkey) -> Result<()> {
    bind(ctx, RecorderSlot::ActivityTracker, program)
}

pub fn bind_tip_module(ctx: Context<BindRecorder>, program: Pubkey) -> Result<()> {
    bind(ctx, RecorderSlot::TipModule, program)
}

fn bind(ctx: Context<BindRecorder>, slot: RecorderSlot, program: Pubkey) -> Result<()> {
    // Only `program` can sign for this PDA, so only it can pass the recorder check
    let (authority, _) = Pubkey::find_program_address(&[RECORDER_SEED], &program);

    ctx.accounts.config.bind(slot, program, authority)?;

    emit!(RecorderBound {
        slot,
        program,
        authority,
    });

    msg!("Bound {:?} recorder {} (authority: {})", slot, program, authority);
    Ok(())
}
