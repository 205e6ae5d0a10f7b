use anchor_lang::prelude::*;

#[event]
pub struct Liked {
    pub from: Pubkey,
    pub target: Pubkey,
    pub epoch: u64,
}
