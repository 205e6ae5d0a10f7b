use anchor_lang::prelude::*;
use crate::errors::FlowNftError;

// =============================================================================
// FLOWNFT STATE - Non-transferable identity with activity-derived state
// =============================================================================
//
// One FlowIdentity per wallet. Its four counters only ever grow, and only via
// the bound recorder modules (ActivityTracker for likes, TipModule for tips).
// The state level is a cache of a pure function of the counter total, kept so
// that transitions can be detected and announced on the write that causes them.
// =============================================================================

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const IDENTITY_SEED: &[u8] = b"identity";
pub const TOKEN_SEED: &[u8] = b"token";
/// Seed of the PDA each recorder program signs registry updates with
pub const RECORDER_SEED: &[u8] = b"recorder";

pub const DEFAULT_ACTIVE_THRESHOLD: u64 = 5;
pub const DEFAULT_BURNING_THRESHOLD: u64 = 20;

/// Derived activity level of an identity
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StateLevel {
    #[default]
    Idle,
    Active,
    Burning,
}

impl StateLevel {
    pub fn from_total(total: u64, thresholds: &Thresholds) -> Self {
        if total >= thresholds.burning {
            StateLevel::Burning
        } else if total >= thresholds.active {
            StateLevel::Active
        } else {
            StateLevel::Idle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StateLevel::Idle => "Idle",
            StateLevel::Active => "Active",
            StateLevel::Burning => "Burning",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StateLevel::Idle => "#95A5A6",
            StateLevel::Active => "#4ECDC4",
            StateLevel::Burning => "#FF6B35",
        }
    }

    /// Only Burning identities get the pulsing indicator
    pub fn pulses(&self) -> bool {
        matches!(self, StateLevel::Burning)
    }
}

/// Interaction totals at which the level steps up
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Thresholds {
    pub active: u64,
    pub burning: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            active: DEFAULT_ACTIVE_THRESHOLD,
            burning: DEFAULT_BURNING_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.active > 0 && self.active < self.burning,
            FlowNftError::InvalidThresholds
        );
        Ok(())
    }
}

/// Which counter a recorder module is bumping
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InteractionKind {
    LikeReceived,
    LikeSent,
    TipReceived,
    TipSent,
}

/// The two privileged recorder slots on the registry
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RecorderSlot {
    ActivityTracker,
    TipModule,
}

// =============================================================================
// REGISTRY CONFIG
// =============================================================================

#[account]
pub struct RegistryConfig {
    /// Deployer allowed to bind recorder modules
    pub admin: Pubkey,

    // === Recorder modules ===
    /// ActivityTracker program id
    pub activity_tracker: Pubkey,
    /// PDA the ActivityTracker signs with
    pub activity_tracker_authority: Pubkey,
    /// TipModule program id
    pub tip_module: Pubkey,
    /// PDA the TipModule signs with
    pub tip_module_authority: Pubkey,

    // === Parameters ===
    /// Identifier handed to the next minter (starts at 1)
    pub next_token_id: u64,
    /// Epoch length in seconds
    pub epoch_length: u64,
    pub thresholds: Thresholds,

    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // admin
        32 +                     // activity_tracker
        32 +                     // activity_tracker_authority
        32 +                     // tip_module
        32 +                     // tip_module_authority
        8 +                      // next_token_id
        8 +                      // epoch_length
        16 +                     // thresholds
        8 +                      // created_at
        1;                       // bump

    /// Whether `key` is the signing authority of a bound recorder
    pub fn is_recorder(&self, key: &Pubkey) -> bool {
        *key != Pubkey::default()
            && (*key == self.activity_tracker_authority || *key == self.tip_module_authority)
    }

    /// Bind a recorder slot. Each slot can be bound exactly once.
    pub fn bind(&mut self, slot: RecorderSlot, program: Pubkey, authority: Pubkey) -> Result<()> {
        require!(program != Pubkey::default(), FlowNftError::InvalidRecorder);

        let (program_slot, authority_slot) = match slot {
            RecorderSlot::ActivityTracker => {
                (&mut self.activity_tracker, &mut self.activity_tracker_authority)
            }
            RecorderSlot::TipModule => (&mut self.tip_module, &mut self.tip_module_authority),
        };
        require!(
            *program_slot == Pubkey::default(),
            FlowNftError::RecorderAlreadyBound
        );

        *program_slot = program;
        *authority_slot = authority;
        Ok(())
    }

    pub fn allocate_token_id(&mut self) -> Result<u64> {
        let token_id = self.next_token_id;
        self.next_token_id = token_id
            .checked_add(1)
            .ok_or(FlowNftError::CounterOverflow)?;
        Ok(token_id)
    }
}

// =============================================================================
// FLOW IDENTITY
// =============================================================================

/// Per-wallet identity record, seeds = ["identity", owner]
#[account]
pub struct FlowIdentity {
    /// The wallet that owns this identity
    pub owner: Pubkey,
    /// Sequential identifier assigned at mint
    pub token_id: u64,

    // === Counters (never decremented) ===
    pub likes_received: u64,
    pub likes_sent: u64,
    pub tips_received: u64,
    pub tips_sent: u64,

    // === Cached ===
    /// Level derived from the counter total at the last write
    pub state_level: StateLevel,
    /// Epoch of the most recent counter update
    pub last_epoch: u64,

    // === Metadata ===
    pub minted_at: i64,
    pub last_updated: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl FlowIdentity {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // owner
        8 +                      // token_id
        8 +                      // likes_received
        8 +                      // likes_sent
        8 +                      // tips_received
        8 +                      // tips_sent
        1 +                      // state_level
        8 +                      // last_epoch
        8 +                      // minted_at
        8 +                      // last_updated
        1;                       // bump
    // Total: 114 bytes

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Sum of all four counters. `record` keeps this from overflowing.
    pub fn total_interactions(&self) -> u64 {
        self.likes_received
            .saturating_add(self.likes_sent)
            .saturating_add(self.tips_received)
            .saturating_add(self.tips_sent)
    }

    /// Apply `delta` to the counter named by `kind` and refresh the cached level.
    ///
    /// Returns `Some((old, new))` when the level changed. Nothing is written
    /// when an error is returned.
    pub fn record(
        &mut self,
        kind: InteractionKind,
        delta: u64,
        epoch: u64,
        thresholds: &Thresholds,
    ) -> Result<Option<(StateLevel, StateLevel)>> {
        require!(delta > 0, FlowNftError::InvalidDelta);

        let total = self
            .total_interactions()
            .checked_add(delta)
            .ok_or(FlowNftError::CounterOverflow)?;

        let counter = match kind {
            InteractionKind::LikeReceived => &mut self.likes_received,
            InteractionKind::LikeSent => &mut self.likes_sent,
            InteractionKind::TipReceived => &mut self.tips_received,
            InteractionKind::TipSent => &mut self.tips_sent,
        };
        *counter = counter
            .checked_add(delta)
            .ok_or(FlowNftError::CounterOverflow)?;
        self.last_epoch = epoch;

        let old_level = self.state_level;
        let new_level = StateLevel::from_total(total, thresholds);
        if new_level == old_level {
            return Ok(None);
        }
        self.state_level = new_level;
        Ok(Some((old_level, new_level)))
    }

    pub fn flow_state(&self, epoch: u64) -> FlowState {
        FlowState {
            epoch,
            likes_received: self.likes_received,
            likes_sent: self.likes_sent,
            tips_received: self.tips_received,
            tips_sent: self.tips_sent,
            total_interactions: self.total_interactions(),
            state_level: self.state_level,
        }
    }
}

/// Maps a token identifier back to its owner, seeds = ["token", id_le_bytes]
#[account]
pub struct TokenRecord {
    pub token_id: u64,
    pub owner: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

impl TokenRecord {
    pub const SIZE: usize = 8 + 8 + 32 + 1;
}

/// Read model returned by `get_flow_state`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FlowState {
    pub epoch: u64,
    pub likes_received: u64,
    pub likes_sent: u64,
    pub tips_received: u64,
    pub tips_sent: u64,
    pub total_interactions: u64,
    pub state_level: StateLevel,
}

impl FlowState {
    /// State reported for a wallet that never minted
    pub fn unminted(epoch: u64) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }
}

/// Whether `info` holds a minted FlowNFT account owned by this program
pub fn is_minted(info: &AccountInfo) -> bool {
    info.owner == &crate::ID && !info.data_is_empty()
}
