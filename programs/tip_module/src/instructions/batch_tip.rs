use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use flow_nft::epoch::current_epoch;
use flow_nft::program::FlowNft;
use flow_nft::recorder::RecorderCpi;
use flow_nft::state::{InteractionKind, RegistryConfig, IDENTITY_SEED, REGISTRY_SEED};
use flow_nft::RECORDER_SEED;
use crate::errors::TipError;
use crate::events::Tipped;
use crate::ledger::credit_ledger;
use crate::state::{validate_batch, TipConfig, TipLedger, LEDGER_SEED, TIP_CONFIG_SEED, VAULT_SEED};

// =============================================================================
// BATCH TIP INSTRUCTION
// =============================================================================
//
// The sender attaches one lump sum that must equal the sum of `amounts`. The
// whole batch is validated before any lamports move, and any later failure
// (e.g. an unminted target) aborts the transaction, so either every target
// is credited or none is.
//
// remaining_accounts, per target and in order:
//   [0] target ledger   (mut)   ["ledger", target] under this program
//   [1] target identity (mut)   ["identity", target] under flow_nft
// =============================================================================

#[derive(Accounts)]
pub struct BatchTip<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        mut,
        seeds = [TIP_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, TipConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = config.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = sender,
        space = TipLedger::SIZE,
        seeds = [LEDGER_SEED, sender.key().as_ref()],
        bump,
    )]
    pub sender_ledger: Account<'info, TipLedger>,

    /// CHECK: Address checked by seeds; the registry rejects unminted identities
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
    ctx: Context<'_, '_, 'info, 'info, BatchTip<'info>>,
    targets: Vec<Pubkey>,
    amounts: Vec<u64>,
    attached_value: u64,
) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    let total = validate_batch(
        &sender,
        &targets,
        &amounts,
        attached_value,
        ctx.accounts.config.min_tip,
    )?;
    require!(
        ctx.remaining_accounts.len() == targets.len() * ACCOUNTS_PER_TARGET,
        TipError::InvalidRemainingAccounts
    );

    let sender_info = ctx.accounts.sender.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    system_program::transfer(
        CpiContext::new(
            system_info.clone(),
            Transfer {
                from: sender_info.clone(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        total,
    )?;
    ctx.accounts.config.custody(total)?;

    let sender_ledger = &mut ctx.accounts.sender_ledger;
    sender_ledger.claim(sender, ctx.bumps.sender_ledger);
    sender_ledger.record_sent(total)?;

    let registry = RecorderCpi {
        flow_nft_program: ctx.accounts.flow_nft_program.to_account_info(),
        config: ctx.accounts.registry_config.to_account_info(),
        recorder: ctx.accounts.recorder.to_account_info(),
        recorder_bump: ctx.bumps.recorder,
    };
    let epoch = current_epoch(ctx.accounts.registry_config.epoch_length)?;

    for ((target, amount), accounts) in targets
        .iter()
        .zip(amounts.iter().copied())
        .zip(ctx.remaining_accounts.chunks(ACCOUNTS_PER_TARGET))
    {
        let ledger_info = &accounts[0];
        let target_identity = &accounts[1];

        let (expected_ledger, ledger_bump) =
            Pubkey::find_program_address(&[LEDGER_SEED, target.as_ref()], &crate::ID);
        require_keys_eq!(
            ledger_info.key(),
            expected_ledger,
            TipError::InvalidRemainingAccounts
        );

        let (expected_identity, _) =
            Pubkey::find_program_address(&[IDENTITY_SEED, target.as_ref()], &flow_nft::ID);
        require_keys_eq!(
            target_identity.key(),
            expected_identity,
            TipError::InvalidRemainingAccounts
        );

        credit_ledger(
            &sender_info,
            ledger_info,
            &system_info,
            *target,
            ledger_bump,
            amount,
        )?;

        registry.record(
            ctx.accounts.sender_identity.to_account_info(),
            InteractionKind::TipSent,
        )?;
        registry.record(target_identity.clone(), InteractionKind::TipReceived)?;

        emit!(Tipped {
            from: sender,
            target: *target,
            amount,
            epoch,
        });
    }

    msg!(
        "{} tipped {} users {} lamports in total",
        sender,
        targets.len(),
        total
    );

    Ok(())
}
