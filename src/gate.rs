// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::store::EntityStore;

pub const DEFAULT_CODE: &str = "0000";

const CODE_KEY: &str = "access_code";

pub fn current_code(store: &EntityStore) -> Result<String, LedgerError> {
    Ok(store
        .setting(CODE_KEY)?
        .unwrap_or_else(|| DEFAULT_CODE.to_string()))
}

/// Check the supplied code before a gated operation (export and roster
/// edits). The aggregation engine is unaware of this gate; it runs strictly
/// before the engine is invoked.
pub fn require_code(store: &EntityStore, supplied: Option<&str>) -> Result<(), LedgerError> {
    let expected = current_code(store)?;
    match supplied {
        Some(code) if code == expected => Ok(()),
        _ => Err(LedgerError::AccessDenied),
    }
}

pub fn set_code(store: &EntityStore, current: Option<&str>, new: &str) -> Result<(), LedgerError> {
    require_code(store, current)?;
    if !(4..=6).contains(&new.len()) || !new.chars().all(|c| c.is_ascii_digit()) {
        return Err(LedgerError::InvalidAccessCode);
    }
    store.set_setting(CODE_KEY, new)
}
