// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::gate;
use crate::store::EntityStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            gate::require_code(store, sub.get_one::<String>("code").map(|s| s.as_str()))?;
            let name = sub.get_one::<String>("name").unwrap().trim();
            let position = sub.get_one::<String>("position").unwrap().trim();
            let id = store.add_person(name, position)?;
            println!("Added {} ({}) with id {}", name, position, id);
        }
        Some(("edit", sub)) => {
            gate::require_code(store, sub.get_one::<String>("code").map(|s| s.as_str()))?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let name = sub.get_one::<String>("name").map(|s| s.trim());
            let position = sub.get_one::<String>("position").map(|s| s.trim());
            store.update_person(id, name, position)?;
            println!("Updated person {}", id);
        }
        Some(("rm", sub)) => {
            gate::require_code(store, sub.get_one::<String>("code").map(|s| s.as_str()))?;
            let id = *sub.get_one::<i64>("id").unwrap();
            store.remove_person(id)?;
            println!("Removed person {}; their entries stay on the ledger", id);
        }
        Some(("list", sub)) => {
            let people = store.people()?;
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &people)? {
                let rows: Vec<Vec<String>> = people
                    .iter()
                    .map(|p| vec![p.id.to_string(), p.name.clone(), p.position.clone()])
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Position"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
