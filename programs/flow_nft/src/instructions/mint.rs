use anchor_lang::prelude::*;
use crate::epoch::epoch_at;
use crate::errors::FlowNftError;
use crate::events::IdentityMinted;
use crate::state::{
    FlowIdentity, RegistryConfig, StateLevel, TokenRecord, IDENTITY_SEED, REGISTRY_SEED,
    TOKEN_SEED,
};

#[derive(Accounts)]
pub struct MintIdentity<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    // init_if_needed so a repeat mint reports AlreadyRegistered instead of an
    // opaque "account in use" from the system program
    #[account(
        init_if_needed,
        payer = owner,
        space = FlowIdentity::SIZE,
        seeds = [IDENTITY_SEED, owner.key().as_ref()],
        bump,
    )]
    pub identity: Account<'info, FlowIdentity>,

    #[account(
        init,
        payer = owner,
        space = TokenRecord::SIZE,
        seeds = [TOKEN_SEED, &config.next_token_id.to_le_bytes()],
        bump,
    )]
    pub token_record: Account<'info, TokenRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintIdentity>) -> Result<()> {
    let identity = &mut ctx.accounts.identity;
    require!(!identity.is_initialized(), FlowNftError::AlreadyRegistered);

    let config = &mut ctx.accounts.config;
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;
    let token_id = config.allocate_token_id()?;

    identity.owner = owner;
    identity.token_id = token_id;

    identity.likes_received = 0;
    identity.likes_sent = 0;
    identity.tips_received = 0;
    identity.tips_sent = 0;

    identity.state_level = StateLevel::Idle;
    identity.last_epoch = epoch_at(clock.unix_timestamp, config.epoch_length);

    identity.minted_at = clock.unix_timestamp;
    identity.last_updated = clock.unix_timestamp;
    identity.bump = ctx.bumps.identity;

    let token_record = &mut ctx.accounts.token_record;
    token_record.token_id = token_id;
    token_record.owner = owner;
    token_record.bump = ctx.bumps.token_record;

    emit!(IdentityMinted { owner, token_id });

    msg!("Minted FlowNFT #{} for {}", token_id, owner);

    Ok(())
}
