// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Store and access-gate faults. Aggregation itself never fails; bad data is
/// resolved to sentinels or zero contributions before it can reach a total.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be a positive integer, got {0}")]
    NonPositiveAmount(i64),
    #[error("unknown entry kind '{0}'")]
    UnknownKind(String),
    #[error("'{0}' is not an income category")]
    UnknownIncomeCategory(String),
    #[error("'{0}' is not a known expense category")]
    UnknownExpenseCategory(String),
    #[error("expense category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("no person with id {0}")]
    UnknownPerson(i64),
    #[error("no entry with id {0}")]
    UnknownEntry(i64),
    #[error("'{0}' is not a roster position")]
    UnknownPosition(String),
    #[error("duplicate {what} id {id} in snapshot")]
    DuplicateId { what: &'static str, id: i64 },
    #[error("access code rejected")]
    AccessDenied,
    #[error("access code must be 4-6 digits")]
    InvalidAccessCode,
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
