use anchor_lang::prelude::*;
use crate::errors::TipError;
use crate::state::{TipConfig, TIP_CONFIG_SEED};

#[derive(Accounts)]
pub struct SetMinTip<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TIP_CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ TipError::Unauthorized,
    )]
    pub config: Account<'info, TipConfig>,
}

pub fn handler(ctx: Context<SetMinTip>, min_tip: u64) -> Result<()> {
    require!(min_tip > 0, TipError::InvalidMinimum);

    let config = &mut ctx.accounts.config;
    let previous = config.min_tip;
    config.min_tip = min_tip;

    msg!("Set min tip from {} to {} lamports", previous, min_tip);
    Ok(())
}
