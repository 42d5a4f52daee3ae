//! Validity filtering of raw records.

use crate::host::ItemRecord;

/// Returns true when a record is safe to read further fields from.
///
/// The host can return transient ghost handles during scene transitions, so
/// every check must hold: the live-entity flag, a nonzero record address, and
/// both descriptive components resolving with nonzero addresses. Never fails.
pub fn is_live_record(record: &dyn ItemRecord) -> bool {
    if !record.is_valid() {
        return false;
    }
    if record.address().is_null() {
        return false;
    }
    let Some(base) = record.base() else {
        return false;
    };
    if base.address.is_null() {
        return false;
    }
    let Some(mods) = record.mods() else {
        return false;
    };
    !mods.address.is_null()
}
