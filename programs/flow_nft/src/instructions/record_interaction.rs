use anchor_lang::prelude::*;
use crate::epoch::epoch_at;
use crate::errors::FlowNftError;
use crate::events::StateChanged;
use crate::pda::{read_account, write_account};
use crate::state::{is_minted, FlowIdentity, InteractionKind, RegistryConfig, REGISTRY_SEED};

// =============================================================================
// RECORD INTERACTION INSTRUCTION
// =============================================================================
//
// The single write path into identity counters. Only reachable through CPI
// from a bound recorder module, which signs with its ["recorder"] PDA.
// =============================================================================

#[derive(Accounts)]
pub struct RecordInteraction<'info> {
    /// Signing PDA of a bound recorder program
    pub recorder: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
        constraint = config.is_recorder(&recorder.key()) @ FlowNftError::Unauthorized,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// The subject's identity
    /// CHECK: Validated in handler so an unminted subject reports UnknownIdentity
    #[account(mut)]
    pub identity: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<RecordInteraction>, kind: InteractionKind, delta: u64) -> Result<()> {
    let info = ctx.accounts.identity.to_account_info();
    require!(is_minted(&info), FlowNftError::UnknownIdentity);

    let mut identity: FlowIdentity = read_account(&info)?;
    let config = &ctx.accounts.config;
    let clock = Clock::get()?;
    let epoch = epoch_at(clock.unix_timestamp, config.epoch_length);

    let transition = identity.record(kind, delta, epoch, &config.thresholds)?;
    identity.last_updated = clock.unix_timestamp;
    write_account(&info, &identity)?;

    if let Some((old_level, new_level)) = transition {
        emit!(StateChanged {
            subject: identity.owner,
            old_level,
            new_level,
        });

        msg!(
            "FlowNFT #{} changed state: {} -> {}",
            identity.token_id,
            old_level.label(),
            new_level.label()
        );
    }

    msg!(
        "Recorded {:?} x{} for {} (total: {}, state: {})",
        kind,
        delta,
        identity.owner,
        identity.total_interactions(),
        identity.state_level.label()
    );

    Ok(())
}
