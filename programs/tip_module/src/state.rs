use anchor_lang::prelude::*;
use crate::errors::TipError;

// =============================================================================
// TIP MODULE STATE - Pull-payment escrow
// =============================================================================
//
// Tips never go straight to the recipient. The lamports land in the vault PDA
// and the recipient's ledger is credited; the recipient later pulls the whole
// balance out with `withdraw`. The config tracks how much of the vault is
// owed so the sum of pending balances can be checked against custody.
// =============================================================================

pub const TIP_CONFIG_SEED: &[u8] = b"tip_config";
pub const VAULT_SEED: &[u8] = b"vault";
pub const LEDGER_SEED: &[u8] = b"ledger";

/// 0.0001 SOL
pub const DEFAULT_MIN_TIP: u64 = 100_000;

/// Most targets a single batch_tip can carry
pub const MAX_BATCH: usize = 10;

#[account]
pub struct TipConfig {
    /// Can adjust the minimum tip
    pub authority: Pubkey,
    /// Smallest accepted tip in lamports
    pub min_tip: u64,
    /// Lamports in the vault owed to recipients
    pub total_custodied: u64,
    /// Lamports ever tipped through the module
    pub total_tipped: u64,
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
    /// Vault PDA bump seed
    pub vault_bump: u8,
}

impl TipConfig {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        8 +                      // min_tip
        8 +                      // total_custodied
        8 +                      // total_tipped
        8 +                      // created_at
        1 +                      // bump
        1;                       // vault_bump

    /// Account for lamports that just entered the vault
    pub fn custody(&mut self, amount: u64) -> Result<()> {
        self.total_custodied = self
            .total_custodied
            .checked_add(amount)
            .ok_or(TipError::AmountOverflow)?;
        self.total_tipped = self
            .total_tipped
            .checked_add(amount)
            .ok_or(TipError::AmountOverflow)?;
        Ok(())
    }

    /// Account for lamports about to leave the vault
    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.total_custodied = self
            .total_custodied
            .checked_sub(amount)
            .ok_or(TipError::InsufficientVaultBalance)?;
        Ok(())
    }
}

/// Per-wallet tip ledger, seeds = ["ledger", owner]
#[account]
#[derive(Default)]
pub struct TipLedger {
    pub owner: Pubkey,
    /// Lamports waiting to be withdrawn
    pub pending: u64,
    /// Lamports ever received in tips
    pub total_received: u64,
    /// Lamports ever sent as tips
    pub total_sent: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl TipLedger {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 8 + 1;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Stamp owner and bump on a freshly created ledger
    pub fn claim(&mut self, owner: Pubkey, bump: u8) {
        if !self.is_initialized() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.pending = self
            .pending
            .checked_add(amount)
            .ok_or(TipError::AmountOverflow)?;
        self.total_received = self
            .total_received
            .checked_add(amount)
            .ok_or(TipError::AmountOverflow)?;
        Ok(())
    }

    pub fn record_sent(&mut self, amount: u64) -> Result<()> {
        self.total_sent = self
            .total_sent
            .checked_add(amount)
            .ok_or(TipError::AmountOverflow)?;
        Ok(())
    }

    /// Zero the pending balance and return what it held
    pub fn take_pending(&mut self) -> Result<u64> {
        require!(self.pending > 0, TipError::NothingToWithdraw);
        let amount = self.pending;
        self.pending = 0;
        Ok(amount)
    }
}

pub fn validate_tip(sender: &Pubkey, target: &Pubkey, amount: u64, min_tip: u64) -> Result<()> {
    require!(amount >= min_tip, TipError::BelowMinimum);
    require_keys_neq!(*target, *sender, TipError::SelfInteraction);
    Ok(())
}

/// Checks a whole batch before any lamports move. Returns the batch total.
pub fn validate_batch(
    sender: &Pubkey,
    targets: &[Pubkey],
    amounts: &[u64],
    attached_value: u64,
    min_tip: u64,
) -> Result<u64> {
    require!(!targets.is_empty(), TipError::EmptyBatch);
    require!(targets.len() == amounts.len(), TipError::LengthMismatch);
    require!(targets.len() <= MAX_BATCH, TipError::BatchTooLarge);

    let total = amounts
        .iter()
        .try_fold(0u64, |sum, amount| sum.checked_add(*amount))
        .ok_or(TipError::AmountOverflow)?;
    require!(total == attached_value, TipError::ValueMismatch);

    for (i, (target, amount)) in targets.iter().zip(amounts).enumerate() {
        validate_tip(sender, target, *amount, min_tip)?;
        require!(!targets[..i].contains(target), TipError::DuplicateTarget);
    }
    Ok(total)
}
