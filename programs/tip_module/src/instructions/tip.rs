use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use flow_nft::epoch::current_epoch;
use flow_nft::program::FlowNft;
use flow_nft::recorder::RecorderCpi;
use flow_nft::state::{InteractionKind, RegistryConfig, IDENTITY_SEED, REGISTRY_SEED};
use flow_nft::RECORDER_SEED;
use crate::events::Tipped;
use crate::ledger::credit_ledger;
use crate::state::{validate_tip, TipConfig, TipLedger, LEDGER_SEED, TIP_CONFIG_SEED, VAULT_SEED};

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct Tip<'info> {
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

    /// CHECK: Address checked by seeds; opened in handler after the tip is validated
    #[account(
        mut,
        seeds = [LEDGER_SEED, target.as_ref()],
        bump,
    )]
    pub target_ledger: UncheckedAccount<'info>,

    /// CHECK: Address checked by seeds; the registry rejects unminted identities
    #[account(
        mut,
        seeds = [IDENTITY_SEED, sender.key().as_ref()],
        bump,
        seeds::program = flow_nft::ID,
    )]
    pub sender_identity: UncheckedAccount<'info>,

    /// CHECK: Address checked by seeds; the registry rejects unminted identities
    #[account(
        mut,
        seeds = [IDENTITY_SEED, target.as_ref()],
        bump,
        seeds::program = flow_nft::ID,
    )]
    pub target_identity: UncheckedAccount<'info>,

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

pub fn handler(ctx: Context<Tip>, target: Pubkey, amount: u64) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    validate_tip(&sender, &target, amount, ctx.accounts.config.min_tip)?;

    // Lamports go to the vault, never straight to the target
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.sender.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;
    ctx.accounts.config.custody(amount)?;

    let target_ledger = credit_ledger(
        &ctx.accounts.sender.to_account_info(),
        &ctx.accounts.target_ledger.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        target,
        ctx.bumps.target_ledger,
        amount,
    )?;

    let sender_ledger = &mut ctx.accounts.sender_ledger;
    sender_ledger.claim(sender, ctx.bumps.sender_ledger);
    sender_ledger.record_sent(amount)?;

    let registry = RecorderCpi {
        flow_nft_program: ctx.accounts.flow_nft_program.to_account_info(),
        config: ctx.accounts.registry_config.to_account_info(),
        recorder: ctx.accounts.recorder.to_account_info(),
        recorder_bump: ctx.bumps.recorder,
    };
    registry.record(
        ctx.accounts.sender_identity.to_account_info(),
        InteractionKind::TipSent,
    )?;
    registry.record(
        ctx.accounts.target_identity.to_account_info(),
        InteractionKind::TipReceived,
    )?;

    let epoch = current_epoch(ctx.accounts.registry_config.epoch_length)?;

    emit!(Tipped {
        from: sender,
        target,
        amount,
        epoch,
    });

    msg!(
        "{} tipped {} {} lamports (pending: {})",
        sender,
        target,
        amount,
        target_ledger.pending
    );

    Ok(())
}
