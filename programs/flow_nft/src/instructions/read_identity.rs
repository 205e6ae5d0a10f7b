use anchor_lang::prelude::*;
use crate::epoch::current_epoch;
use crate::state::{
    is_minted, FlowIdentity, FlowState, RegistryConfig, StateLevel, IDENTITY_SEED,
    REGISTRY_SEED,
};

// =============================================================================
// READ-ONLY IDENTITY VIEWS
// =============================================================================
//
// Simulated by clients; values come back through return data. A wallet that
// never minted is a valid query and reads as unminted rather than failing.
// =============================================================================

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ReadIdentity<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: May not exist yet; only deserialized when owned by this program
    #[account(
        seeds = [IDENTITY_SEED, owner.as_ref()],
        bump,
    )]
    pub identity: UncheckedAccount<'info>,
}

impl<'info> ReadIdentity<'info> {
    fn load(&self) -> Result<Option<FlowIdentity>> {
        let info = self.identity.to_account_info();
        if !is_minted(&info) {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        Ok(Some(FlowIdentity::try_deserialize(&mut &data[..])?))
    }
}

pub fn has_minted(ctx: Context<ReadIdentity>) -> Result<bool> {
    Ok(ctx.accounts.load()?.is_some())
}

/// Token identifier held by the wallet, or 0 if it never minted
pub fn token_of_owner(ctx: Context<ReadIdentity>) -> Result<u64> {
    Ok(ctx.accounts.load()?.map_or(0, |identity| identity.token_id))
}

pub fn get_flow_state(ctx: Context<ReadIdentity>) -> Result<FlowState> {
    let epoch = current_epoch(ctx.accounts.config.epoch_length)?;
    Ok(match ctx.accounts.load()? {
        Some(identity) => identity.flow_state(epoch),
        None => FlowState::unminted(epoch),
    })
}

pub fn get_state_level(ctx: Context<ReadIdentity>) -> Result<StateLevel> {
    Ok(ctx
        .accounts
        .load()?
        .map_or(StateLevel::Idle, |identity| identity.state_level))
}
