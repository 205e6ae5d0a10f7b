use anchor_lang::prelude::*;
use crate::cpi::accounts::RecordInteraction;
use crate::state::{InteractionKind, RECORDER_SEED};

/// CPI handle a recorder program uses to report interactions to the registry.
///
/// `recorder` is the calling program's ["recorder"] PDA; the registry only
/// accepts it once the admin has bound that program.
pub struct RecorderCpi<'info> {
    pub flow_nft_program: AccountInfo<'info>,
    pub config: AccountInfo<'info>,
    pub recorder: AccountInfo<'info>,
    pub recorder_bump: u8,
}

impl<'info> RecorderCpi<'info> {
    pub fn record(&self, identity: AccountInfo<'info>, kind: InteractionKind) -> Result<()> {
        let bump = [self.recorder_bump];
        let seeds: &[&[u8]] = &[RECORDER_SEED, &bump];
        let signer = &[seeds];

        let cpi_ctx = CpiContext::new_with_signer(
            self.flow_nft_program.clone(),
            RecordInteraction {
                recorder: self.recorder.clone(),
                config: self.config.clone(),
                identity,
            },
            signer,
        );
        crate::cpi::record_interaction(cpi_ctx, kind, 1)
    }
}
