use anchor_lang::prelude::*;

pub mod epoch;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod metadata;
pub mod pda;
#[cfg(feature = "cpi")]
pub mod recorder;
pub mod state;

use instructions::*;
use state::{FlowState, InteractionKind, StateLevel};

pub use state::RECORDER_SEED;

declare_id!("8vKFuMLBN2EXHDud6oJ9pV9P84d9BqVff3b9yoCHnaiQ");

#[program]
pub mod flow_nft {
    use super::*;

    // === Administration ===

    /// Create the registry config; the signer becomes admin
    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        params: InitializeRegistryParams,
    ) -> Result<()> {
        instructions::initialize_registry::handler(ctx, params)
    }

    /// Bind the ActivityTracker program as a recorder (once)
    pub fn bind_activity_tracker(ctx: Context<BindRecorder>, recorder_program: Pubkey) -> Result<()> {
        instructions::bind_recorder::bind_activity_tracker(ctx, recorder_program)
    }

    /// Bind the TipModule program as a recorder (once)
    pub fn bind_tip_module(ctx: Context<BindRecorder>, recorder_program: Pubkey) -> Result<()> {
        instructions::bind_recorder::bind_tip_module(ctx, recorder_program)
    }

    // === Identity ===

    /// Mint the signer's non-transferable FlowNFT
    pub fn mint(ctx: Context<MintIdentity>) -> Result<()> {
        instructions::mint::handler(ctx)
    }

    /// Bump one of an identity's counters. Recorder modules only.
    pub fn record_interaction(
        ctx: Context<RecordInteraction>,
        kind: InteractionKind,
        delta: u64,
    ) -> Result<()> {
        instructions::record_interaction::handler(ctx, kind, delta)
    }

    // === Views ===

    pub fn has_minted(ctx: Context<ReadIdentity>, _owner: Pubkey) -> Result<bool> {
        instructions::read_identity::has_minted(ctx)
    }

    pub fn token_of_owner(ctx: Context<ReadIdentity>, _owner: Pubkey) -> Result<u64> {
        instructions::read_identity::token_of_owner(ctx)
    }

    pub fn get_flow_state(ctx: Context<ReadIdentity>, _owner: Pubkey) -> Result<FlowState> {
        instructions::read_identity::get_flow_state(ctx)
    }

    pub fn get_state_level(ctx: Context<ReadIdentity>, _owner: Pubkey) -> Result<StateLevel> {
        instructions::read_identity::get_state_level(ctx)
    }

    /// Publish the token's metadata document as a `TokenUriRendered` event
    pub fn token_uri(ctx: Context<TokenUri>, token_id: u64) -> Result<()> {
        instructions::token_uri::handler(ctx, token_id)
    }
}
