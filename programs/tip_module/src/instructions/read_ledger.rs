use anchor_lang::prelude::*;
use flow_nft::epoch::current_epoch;
use flow_nft::state::{RegistryConfig, REGISTRY_SEED};
use crate::state::{TipLedger, LEDGER_SEED};

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ReadLedger<'info> {
    /// CHECK: May not exist yet; only deserialized when owned by this program
    #[account(
        seeds = [LEDGER_SEED, owner.as_ref()],
        bump,
    )]
    pub ledger: UncheckedAccount<'info>,
}

impl<'info> ReadLedger<'info> {
    /// Ledger contents, or an empty ledger for a wallet never involved in a tip
    fn load(&self) -> Result<TipLedger> {
        let info = self.ledger.to_account_info();
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(TipLedger::default());
        }
        let data = info.try_borrow_data()?;
        TipLedger::try_deserialize(&mut &data[..])
    }
}

#[derive(Accounts)]
pub struct ReadEpoch<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry_config.bump,
        seeds::program = flow_nft::ID,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
}

pub fn pending_withdrawals(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.load()?.pending)
}

pub fn total_tips_received(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.load()?.total_received)
}

pub fn total_tips_sent(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.load()?.total_sent)
}

pub fn get_current_epoch(ctx: Context<ReadEpoch>) -> Result<u64> {
    current_epoch(ctx.accounts.registry_config.epoch_length)
}
