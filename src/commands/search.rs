// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::engine::search;
use crate::models::{EntryKind, name_index, resolve_name};
use crate::store::EntityStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("person", sub)) => by_person(store, sub)?,
        Some(("category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn by_person(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let from = parse_date(sub.get_one::<String>("from").unwrap())?;
    let to = parse_date(sub.get_one::<String>("to").unwrap())?;
    let snapshot = store.snapshot()?;
    let result = search::by_person(&snapshot.entries, id, from, to);

    let names = name_index(&snapshot.people);
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &result)? {
        let rows: Vec<Vec<String>> = result
            .matches
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.category.clone(),
                    e.amount.to_string(),
                    e.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "Income from {} between {} and {}",
            resolve_name(&names, Some(id)),
            from,
            to
        );
        println!("{}", pretty_table(&["Date", "Category", "Amount", "Note"], rows));
        println!("Total: {}", result.total);
    }
    Ok(())
}

fn by_category(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind: EntryKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub.get_one::<String>("name").unwrap().trim();
    let from = parse_date(sub.get_one::<String>("from").unwrap())?;
    let to = parse_date(sub.get_one::<String>("to").unwrap())?;
    let snapshot = store.snapshot()?;
    let result = search::by_category(&snapshot.entries, kind, category, from, to);

    let names = name_index(&snapshot.people);
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &result)? {
        let rows: Vec<Vec<String>> = result
            .matches
            .iter()
            .map(|e| {
                let person = match (e.kind, e.person_id) {
                    (EntryKind::Expense, None) => String::new(),
                    (_, pid) => resolve_name(&names, pid).to_string(),
                };
                vec![
                    e.date.to_string(),
                    person,
                    e.amount.to_string(),
                    e.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{} '{}' between {} and {}",
            kind.as_str(),
            category,
            from,
            to
        );
        println!("{}", pretty_table(&["Date", "Person", "Amount", "Note"], rows));
        println!("Total: {}", result.total);
    }
    Ok(())
}
