use anchor_lang::prelude::*;

#[event]
pub struct Tipped {
    pub from: Pubkey,
    pub target: Pubkey,
    pub amount: u64,
    pub epoch: u64,
}

#[event]
pub struct Withdrawn {
    pub who: Pubkey,
    pub amount: u64,
}
