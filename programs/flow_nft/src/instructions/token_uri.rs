use anchor_lang::prelude::*;
use crate::epoch::current_epoch;
use crate::errors::FlowNftError;
use crate::events::TokenUriRendered;
use crate::metadata;
use crate::state::{is_minted, FlowIdentity, RegistryConfig, TokenRecord, REGISTRY_SEED, TOKEN_SEED};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TokenUri<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: Validated in handler so an unknown id reports UnknownToken
    #[account(
        seeds = [TOKEN_SEED, &token_id.to_le_bytes()],
        bump,
    )]
    pub token_record: UncheckedAccount<'info>,

    /// CHECK: Validated against the token record in handler
    pub identity: UncheckedAccount<'info>,
}

/// Render the token's metadata document.
///
/// The document is larger than the 1024-byte return data limit, so it is
/// published as a `TokenUriRendered` event for clients simulating the call.
pub fn handler(ctx: Context<TokenUri>, token_id: u64) -> Result<()> {
    let record_info = ctx.accounts.token_record.to_account_info();
    require!(is_minted(&record_info), FlowNftError::UnknownToken);
    let record = TokenRecord::try_deserialize(&mut &record_info.try_borrow_data()?[..])?;

    let identity_info = ctx.accounts.identity.to_account_info();
    require!(is_minted(&identity_info), FlowNftError::UnknownIdentity);
    let identity = FlowIdentity::try_deserialize(&mut &identity_info.try_borrow_data()?[..])?;
    require!(
        identity.owner == record.owner && identity.token_id == token_id,
        FlowNftError::UnknownToken
    );

    let epoch = current_epoch(ctx.accounts.config.epoch_length)?;
    let uri = metadata::token_uri(token_id, &identity.flow_state(epoch));

    msg!(
        "Rendered metadata for FlowNFT #{} ({} bytes, state: {})",
        token_id,
        uri.len(),
        identity.state_level.label()
    );

    emit!(TokenUriRendered { token_id, uri });

    Ok(())
}
