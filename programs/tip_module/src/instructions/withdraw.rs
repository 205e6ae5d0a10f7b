use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::TipError;
use crate::events::Withdrawn;
use crate::state::{TipConfig, TipLedger, LEDGER_SEED, TIP_CONFIG_SEED, VAULT_SEED};

// =============================================================================
// WITHDRAW INSTRUCTION
// =============================================================================
//
// Pays out the caller's entire pending balance. The ledger is zeroed and the
// custody total reduced before the vault transfer; if the transfer fails the
// transaction aborts and the balance is back where it was.
// =============================================================================

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub recipient: Signer<'info>,

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

    // init_if_needed so a wallet that was never tipped gets NothingToWithdraw
    #[account(
        init_if_needed,
        payer = recipient,
        space = TipLedger::SIZE,
        seeds = [LEDGER_SEED, recipient.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, TipLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();

    // Effects before the interaction
    let amount = ctx.accounts.ledger.take_pending()?;
    ctx.accounts.config.release(amount)?;

    let reserve = Rent::get()?.minimum_balance(0);
    require!(
        ctx.accounts.vault.lamports() >= reserve.saturating_add(amount),
        TipError::InsufficientVaultBalance
    );

    let vault_bump = [ctx.accounts.config.vault_bump];
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &vault_bump];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
            &[vault_seeds],
        ),
        amount,
    )?;

    emit!(Withdrawn {
        who: recipient,
        amount,
    });

    msg!("{} withdrew {} lamports", recipient, amount);

    Ok(())
}
