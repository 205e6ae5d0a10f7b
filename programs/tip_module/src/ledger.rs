use anchor_lang::prelude::*;
use flow_nft::pda::{create_pda_account, read_account, write_account};
use crate::state::{TipLedger, LEDGER_SEED};

/// Credit `amount` to `target`'s ledger, opening the ledger on first use.
///
/// Only called once the tip has been validated, so a rejected tip never
/// leaves a ledger behind.
pub fn credit_ledger<'info>(
    payer: &AccountInfo<'info>,
    ledger: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    target: Pubkey,
    bump: u8,
    amount: u64,
) -> Result<TipLedger> {
    let mut account = if ledger.owner == &crate::ID {
        read_account::<TipLedger>(ledger)?
    } else {
        create_pda_account(
            payer,
            ledger,
            system_program,
            TipLedger::SIZE,
            &crate::ID,
            &[LEDGER_SEED, target.as_ref(), &[bump]],
        )?;
        TipLedger::default()
    };

    account.claim(target, bump);
    account.credit(amount)?;
    write_account(ledger, &account)?;
    Ok(account)
}
