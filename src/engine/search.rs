// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Entry, EntryKind};

/// Entries matching a query, oldest first, plus their amount total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub matches: Vec<Entry>,
    pub total: i64,
}

/// Income given by one person within an inclusive date range. Expenses are
/// not attributed to contributors, so they never match a person search.
pub fn by_person(
    entries: &[Entry],
    person_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> SearchResult {
    collect(entries, |e| {
        e.kind == EntryKind::Income
            && e.person_id == Some(person_id)
            && in_range(e.date, start, end)
    })
}

/// Entries of one kind and exact category within an inclusive date range.
pub fn by_category(
    entries: &[Entry],
    kind: EntryKind,
    category: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> SearchResult {
    collect(entries, |e| {
        e.kind == kind && e.category == category && in_range(e.date, start, end)
    })
}

/// Gross income and expense recorded exactly on `today`.
pub fn todays_totals(entries: &[Entry], today: NaiveDate) -> (i64, i64) {
    let mut income = 0i64;
    let mut expense = 0i64;
    for e in entries {
        if e.date != today || e.amount <= 0 {
            continue;
        }
        match e.kind {
            EntryKind::Income => income += e.amount,
            EntryKind::Expense => expense += e.amount,
        }
    }
    (income, expense)
}

// An inverted range matches nothing rather than erroring.
fn in_range(d: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= d && d <= end
}

fn collect<F: Fn(&Entry) -> bool>(entries: &[Entry], pred: F) -> SearchResult {
    let mut matches: Vec<Entry> = entries.iter().filter(|e| pred(e)).cloned().collect();
    matches.sort_by_key(|e| (e.date, e.id));
    let total = matches
        .iter()
        .filter(|e| e.amount > 0)
        .map(|e| e.amount)
        .sum();
    SearchResult { matches, total }
}
