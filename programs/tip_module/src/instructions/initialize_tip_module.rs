use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::TipError;
use crate::state::{TipConfig, TIP_CONFIG_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct InitializeTipModule<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = TipConfig::SIZE,
        seeds = [TIP_CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, TipConfig>,

    /// System-owned PDA holding every custodied tip
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeTipModule>, min_tip: u64) -> Result<()> {
    require!(min_tip > 0, TipError::InvalidMinimum);

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.min_tip = min_tip;
    config.total_custodied = 0;
    config.total_tipped = 0;
    config.created_at = Clock::get()?.unix_timestamp;
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    // Fund the vault's rent reserve up front so tips smaller than the
    // rent-exempt minimum can still land in it
    let reserve = Rent::get()?.minimum_balance(0);
    let shortfall = reserve.saturating_sub(ctx.accounts.vault.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    msg!(
        "Initialized tip module (min tip: {} lamports, vault: {})",
        min_tip,
        ctx.accounts.vault.key()
    );

    Ok(())
}
