// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::engine::feed;
use crate::models::{EntryKind, name_index, resolve_name};
use crate::store::EntityStore;
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.remove_entry(id)?;
            println!("Removed entry {}", id);
        }
        Some(("feed", sub)) => print_feed(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind: EntryKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().trim();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap().trim())?;
    let person = sub.get_one::<i64>("person").copied();
    let note = sub.get_one::<String>("note").map(|s| s.as_str());

    // Capture rule: income is always attributed to someone. Snapshots from
    // elsewhere may still carry personless income; the engine shows those as
    // "unspecified" rather than rejecting them.
    if kind == EntryKind::Income && person.is_none() {
        anyhow::bail!("Income entries need --person (the contributor's id)");
    }

    let id = store.add_entry(kind, date, category, amount, person, note)?;
    println!(
        "Recorded {} of {} for '{}' on {} (id {})",
        kind.as_str(),
        amount,
        category,
        date,
        id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct FeedRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub person: String,
    pub amount: i64,
    pub balance: i64,
    pub note: String,
}

/// Feed lines ready for display: newest first, balances chronological,
/// person references resolved. `--limit` trims from the top.
pub fn feed_rows(store: &EntityStore, sub: &clap::ArgMatches) -> Result<Vec<FeedRow>> {
    let snapshot = store.snapshot()?;
    let lines = feed::display_feed(&snapshot.entries, &snapshot.people);
    let names = name_index(&snapshot.people);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(lines
        .iter()
        .take(limit)
        .map(|line| {
            let person = match (line.entry.kind, line.entry.person_id) {
                (EntryKind::Expense, None) => String::new(),
                (_, pid) => resolve_name(&names, pid).to_string(),
            };
            FeedRow {
                id: line.entry.id,
                date: line.entry.date.to_string(),
                kind: line.entry.kind.as_str().to_string(),
                category: line.entry.category.clone(),
                person,
                amount: line.entry.amount,
                balance: line.balance,
                note: line.entry.note.clone().unwrap_or_default(),
            }
        })
        .collect())
}

fn print_feed(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = feed_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.person.clone(),
                    r.amount.to_string(),
                    r.balance.to_string(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Category", "Person", "Amount", "Balance", "Note"],
                rows,
            )
        );
    }
    Ok(())
}
