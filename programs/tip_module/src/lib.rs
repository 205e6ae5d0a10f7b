use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use instructions::*;

declare_id!("APCp3GFpjAzaFmd2cJ8z6WVWS9MurWw6xiMEAqydfrHa");

#[program]
pub mod tip_module {
    use super::*;

    // === Configuration ===

    /// Create the tip config and fund the vault's rent reserve
    pub fn initialize_tip_module(ctx: Context<InitializeTipModule>, min_tip: u64) -> Result<()> {
        instructions::initialize_tip_module::handler(ctx, min_tip)
    }

    /// Change the minimum accepted tip
    pub fn set_min_tip(ctx: Context<SetMinTip>, min_tip: u64) -> Result<()> {
        instructions::set_min_tip::handler(ctx, min_tip)
    }

    // === Tips ===

    /// Escrow `amount` lamports for `target` and record the tip on both identities
    pub fn tip(ctx: Context<Tip>, target: Pubkey, amount: u64) -> Result<()> {
        instructions::tip::handler(ctx, target, amount)
    }

    /// Tip several holders from one attached sum; all-or-nothing
    pub fn batch_tip<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchTip<'info>>,
        targets: Vec<Pubkey>,
        amounts: Vec<u64>,
        attached_value: u64,
    ) -> Result<()> {
        instructions::batch_tip::handler(ctx, targets, amounts, attached_value)
    }

    /// Pull the caller's full pending balance out of the vault
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    // === Views ===

    pub fn pending_withdrawals(ctx: Context<ReadLedger>, _owner: Pubkey) -> Result<u64> {
        instructions::read_ledger::pending_withdrawals(ctx)
    }

    pub fn total_tips_received(ctx: Context<ReadLedger>, _owner: Pubkey) -> Result<u64> {
        instructions::read_ledger::total_tips_received(ctx)
    }

    pub fn total_tips_sent(ctx: Context<ReadLedger>, _owner: Pubkey) -> Result<u64> {
        instructions::read_ledger::total_tips_sent(ctx)
    }

    pub fn get_current_epoch(ctx: Context<ReadEpoch>) -> Result<u64> {
        instructions::read_ledger::get_current_epoch(ctx)
    }
}
