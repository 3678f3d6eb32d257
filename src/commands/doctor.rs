// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;

use crate::models::EntryKind;
use crate::store::EntityStore;
use crate::utils::pretty_table;
use crate::vocab;

/// Scan for the things capture rejects but an imported snapshot may carry:
/// dangling person references, vocabulary strays, non-positive amounts.
pub fn handle(store: &EntityStore) -> Result<()> {
    let snapshot = store.snapshot()?;
    let mut rows = Vec::new();

    let roster: HashSet<i64> = snapshot.people.iter().map(|p| p.id).collect();
    for e in &snapshot.entries {
        if let Some(pid) = e.person_id {
            if !roster.contains(&pid) {
                rows.push(vec![
                    "dangling_person".into(),
                    format!("entry {} -> person {}", e.id, pid),
                ]);
            }
        }
        if e.amount <= 0 {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("entry {} amount {}", e.id, e.amount),
            ]);
        }
        match e.kind {
            EntryKind::Income => {
                if !vocab::is_income_category(&e.category) {
                    rows.push(vec![
                        "unknown_income_category".into(),
                        format!("entry {} '{}'", e.id, e.category),
                    ]);
                }
            }
            EntryKind::Expense => {
                if !snapshot.expense_categories.iter().any(|c| c == &e.category) {
                    rows.push(vec![
                        "unknown_expense_category".into(),
                        format!("entry {} '{}'", e.id, e.category),
                    ]);
                }
            }
        }
    }
    for p in &snapshot.people {
        if !vocab::is_position(&p.position) {
            rows.push(vec![
                "unknown_position".into(),
                format!("person {} '{}'", p.id, p.position),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
