// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::models::Snapshot;
use crate::store::EntityStore;

/// Replace every collection from a JSON snapshot, atomically. The snapshot
/// must satisfy the same validity rules as freshly entered data (unique ids,
/// positive amounts); unknown categories or positions are let through and
/// surface in `doctor` instead.
pub fn handle(store: &mut EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("Open snapshot {}", path))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).with_context(|| format!("Parse snapshot {}", path))?;

    store.replace_all(&snapshot)?;
    println!(
        "Imported {} people, {} entries, {} expense categories from {}",
        snapshot.people.len(),
        snapshot.entries.len(),
        snapshot.expense_categories.len(),
        path
    );
    Ok(())
}
