use anchor_lang::prelude::*;
use crate::epoch::DEFAULT_EPOCH_LENGTH;
use crate::errors::FlowNftError;
use crate::state::{RegistryConfig, Thresholds, REGISTRY_SEED};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct InitializeRegistryParams {
    /// Epoch length in seconds
    pub epoch_length: u64,
    /// Interaction totals for Active and Burning
    pub thresholds: Thresholds,
}

impl Default for InitializeRegistryParams {
    fn default() -> Self {
        Self {
            epoch_length: DEFAULT_EPOCH_LENGTH,
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Becomes the registry admin
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = RegistryConfig::SIZE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>, params: InitializeRegistryParams) -> Result<()> {
    require!(params.epoch_length > 0, FlowNftError::InvalidEpochLength);
    params.thresholds.validate()?;

    let config = &mut ctx.accounts.config;

    config.admin = ctx.accounts.admin.key();

    // Recorders stay unbound until the admin wires them in
    config.activity_tracker = Pubkey::default();
    config.activity_tracker_authority = Pubkey::default();
    config.tip_module = Pubkey::default();
    config.tip_module_authority = Pubkey::default();

    config.next_token_id = 1;
    config.epoch_length = params.epoch_length;
    config.thresholds = params.thresholds;
    config.created_at = Clock::get()?.unix_timestamp;
    config.bump = ctx.bumps.config;

    msg!(
        "Initialized FlowNFT registry (epoch: {}s, active at {}, burning at {})",
        params.epoch_length,
        params.thresholds.active,
        params.thresholds.burning
    );

    Ok(())
}
