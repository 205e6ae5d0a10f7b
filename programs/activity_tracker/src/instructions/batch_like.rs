use anchor_lang::prelude::*;
use flow_nft::epoch::current_epoch;
use flow_nft::pda::{create_pda_account, read_account, write_account};
use flow_nft::program::FlowNft;
use flow_nft::recorder::RecorderCpi;
use flow_nft::state::{is_minted, InteractionKind, RegistryConfig, IDENTITY_SEED, REGISTRY_SEED};
use flow_nft::RECORDER_SEED;
use crate::errors::ActivityError;
use crate::events::Liked;
use crate::state::{validate_targets, LikeRecord, LIKE_SEED};

// =============================================================================
// BATCH LIKE INSTRUCTION
// =============================================================================
//
// All-or-nothing: every target goes through the same checks as `like`, and the
// first failure aborts the transaction so no like from the batch survives.
//
// remaining_accounts, per target and in order:
//   [0] target identity (mut)   ["identity", target] under flow_nft
//   [1] like record     (mut)   ["like", sender, target] under this program
// =============================================================================

#[derive(Accounts)]
pub struct BatchLike<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Address checked by seeds; existence checked in handler (NotRegistered)
    #[account(
        mut,
        seeds = [IDENTITY_SEED, sender.key().as_ref()],
        bump,
        seeds::program = flow_nft::ID,
    )]
    pub sender_identity: UncheckedAccount<'info>,

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

const ACCOUNTS_PER_TARGET: usize = 2;

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchLike<'info>>,
    targets: Vec<Pubkey>,
) -> Result<()> {
    let sender = ctx.accounts.sender.key();

    require!(
        is_minted(&ctx.accounts.sender_identity.to_account_info()),
        ActivityError::NotRegistered
    );
    validate_targets(&sender, &targets)?;
    require!(
        ctx.remaining_accounts.len() == targets.len() * ACCOUNTS_PER_TARGET,
        ActivityError::InvalidRemainingAccounts
    );

    let epoch = current_epoch(ctx.accounts.registry_config.epoch_length)?;

    let registry = RecorderCpi {
        flow_nft_program: ctx.accounts.flow_nft_program.to_account_info(),
        config: ctx.accounts.registry_config.to_account_info(),
        recorder: ctx.accounts.recorder.to_account_info(),
        recorder_bump: ctx.bumps.recorder,
    };
    let sender_info = ctx.accounts.sender.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    for (target, accounts) in targets
        .iter()
        .zip(ctx.remaining_accounts.chunks(ACCOUNTS_PER_TARGET))
    {
        let target_identity = &accounts[0];
        let record_info = &accounts[1];

        let (expected_identity, _) =
            Pubkey::find_program_address(&[IDENTITY_SEED, target.as_ref()], &flow_nft::ID);
        require_keys_eq!(
            target_identity.key(),
            expected_identity,
            ActivityError::InvalidRemainingAccounts
        );

        let (expected_record, record_bump) = Pubkey::find_program_address(
            &[LIKE_SEED, sender.as_ref(), target.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(
            record_info.key(),
            expected_record,
            ActivityError::InvalidRemainingAccounts
        );

        let mut record = if record_info.owner == &crate::ID {
            read_account::<LikeRecord>(record_info)?
        } else {
            create_pda_account(
                &sender_info,
                record_info,
                &system_info,
                LikeRecord::SIZE,
                &crate::ID,
                &[LIKE_SEED, sender.as_ref(), target.as_ref(), &[record_bump]],
            )?;
            LikeRecord::default()
        };
        record.register(sender, *target, epoch, record_bump)?;
        write_account(record_info, &record)?;

        registry.record(
            ctx.accounts.sender_identity.to_account_info(),
            InteractionKind::LikeSent,
        )?;
        registry.record(target_identity.clone(), InteractionKind::LikeReceived)?;

        emit!(Liked {
            from: sender,
            target: *target,
            epoch,
        });
    }

    msg!("{} liked {} users in epoch {}", sender, targets.len(), epoch);

    Ok(())
}
