use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

// =============================================================================
// PDA ACCOUNT HELPERS
// =============================================================================
//
// For accounts that cannot be declared in an Accounts struct: per-target
// records passed through remaining_accounts, or records that may only be
// opened after the handler has validated its arguments.
// =============================================================================

/// Open a program-owned account at a PDA, paid for by `payer`.
///
/// Anyone can send lamports to an address before it is opened, so an address
/// that already holds lamports is topped up to rent exemption and then
/// allocated and assigned instead of created.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    seeds: &[&[u8]],
) -> Result<()> {
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let current = account.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: account.clone(),
                },
                &[seeds],
            ),
            rent_exempt,
            space as u64,
            owner,
        );
    }

    let shortfall = rent_exempt.max(1).saturating_sub(current);
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            shortfall,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: account.clone(),
            },
            &[seeds],
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: account.clone(),
            },
            &[seeds],
        ),
        owner,
    )
}

/// Deserialize an Anchor account, checking owner and discriminator
pub fn read_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<T> {
    if info.owner != &T::owner() {
        return Err(error!(ErrorCode::AccountOwnedByWrongProgram));
    }
    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut &data[..])?;
    Ok(account)
}

/// Write an Anchor account back, discriminator included
pub fn write_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let dst: &mut [u8] = &mut data;
    account.try_serialize(&mut std::io::Cursor::new(dst))?;
    Ok(())
}
