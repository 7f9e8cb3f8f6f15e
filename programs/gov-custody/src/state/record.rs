// =============================================================================
// Record Loading
// =============================================================================
// Ticket, locked and vest accounts are passed to their instructions unchecked
// and loaded here. A missing, foreign or already-closed record reports
// NotFound instead of a framework account error, so a ticket that was
// consumed by an earlier transaction fails the same way every time.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_lang::{system_program, Discriminator};

use crate::error::GovCustodyError;

pub fn load_record<T>(info: &AccountInfo) -> Result<T>
where
    T: AccountDeserialize + Discriminator + Owner,
{
    if info.owner != &T::owner() || info.data_len() < T::DISCRIMINATOR.len() {
        return err!(GovCustodyError::NotFound);
    }

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map_err(|_| error!(GovCustodyError::NotFound))
}

pub fn store_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)
}

/// Delete a record, returning its rent to `destination`
pub fn close_record<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let destination_lamports = destination.lamports();
    let record_lamports = info.lamports();

    **destination.try_borrow_mut_lamports()? = destination_lamports
        .checked_add(record_lamports)
        .ok_or(GovCustodyError::MathOverflow)?;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&system_program::ID);
    #[allow(deprecated)]
    info.realloc(0, false)?;

    Ok(())
}
