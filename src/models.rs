// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = crate::error::LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(crate::error::LedgerError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub category: String,
    pub amount: i64, // strictly positive; sign lives in `kind`
    pub person_id: Option<i64>,
    pub note: Option<String>,
}

impl Entry {
    /// Signed contribution to a balance: positive for income, negative for
    /// expense. Non-positive amounts count as zero.
    pub fn signed_amount(&self) -> i64 {
        if self.amount <= 0 {
            return 0;
        }
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Full store snapshot; also the import/export round-trip shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub people: Vec<Person>,
    pub entries: Vec<Entry>,
    pub expense_categories: Vec<String>,
}

pub fn name_index(people: &[Person]) -> HashMap<i64, &str> {
    people.iter().map(|p| (p.id, p.name.as_str())).collect()
}

/// Resolve an entry's person reference to a display name. A missing or
/// removed person resolves to the `unspecified` sentinel, never an error.
pub fn resolve_name<'a>(names: &HashMap<i64, &'a str>, person_id: Option<i64>) -> &'a str {
    person_id
        .and_then(|id| names.get(&id).copied())
        .unwrap_or(vocab::UNSPECIFIED)
}
