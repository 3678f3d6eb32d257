// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::gate;
use crate::models::{Entry, Snapshot, name_index, resolve_name};
use crate::store::EntityStore;

pub fn handle(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    gate::require_code(store, sub.get_one::<String>("code").map(|s| s.as_str()))?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let snapshot = store.snapshot()?;

    match fmt.as_str() {
        // The JSON snapshot is the round-trip format `import` accepts back.
        "json" => std::fs::write(out, serde_json::to_string_pretty(&snapshot)?)?,
        "csv" => export_entries_csv(&snapshot, out)?,
        _ => {
            eprintln!("Unknown format: {} (use json|csv)", fmt);
            return Ok(());
        }
    }
    println!("Exported ledger to {}", out);
    Ok(())
}

fn export_entries_csv(snapshot: &Snapshot, out: &str) -> Result<()> {
    let names = name_index(&snapshot.people);
    let mut entries: Vec<&Entry> = snapshot.entries.iter().collect();
    entries.sort_by_key(|e| (e.date, e.id));

    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "kind", "date", "category", "amount", "person", "note"])?;
    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.kind.as_str().to_string(),
            e.date.to_string(),
            e.category.clone(),
            e.amount.to_string(),
            e.person_id
                .map(|id| resolve_name(&names, Some(id)).to_string())
                .unwrap_or_default(),
            e.note.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
