use anchor_lang::prelude::*;
use crate::state::{RecorderSlot, StateLevel};

#[event]
pub struct IdentityMinted {
    pub owner: Pubkey,
    pub token_id: u64,
}

#[event]
pub struct StateChanged {
    pub subject: Pubkey,
    pub old_level: StateLevel,
    pub new_level: StateLevel,
}

#[event]
pub struct RecorderBound {
    pub slot: RecorderSlot,
    pub program: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct TokenUriRendered {
    pub token_id: u64,
    pub uri: String,
}
