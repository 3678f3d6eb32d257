// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::EntityStore;
use crate::utils::{maybe_print_json, pretty_table};
use crate::vocab;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Vocabulary {
    income: Vec<&'static str>,
    expense: Vec<String>,
}

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            store.add_expense_category(name)?;
            println!("Added expense category '{}'", name);
        }
        Some(("list", sub)) => {
            let vocabulary = Vocabulary {
                income: vocab::INCOME_CATEGORIES.to_vec(),
                expense: store.expense_categories()?,
            };
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &vocabulary)? {
                let mut rows: Vec<Vec<String>> = vocabulary
                    .income
                    .iter()
                    .map(|c| vec![c.to_string(), "income".into()])
                    .collect();
                rows.extend(
                    vocabulary
                        .expense
                        .iter()
                        .map(|c| vec![c.clone(), "expense".into()]),
                );
                println!("{}", pretty_table(&["Category", "Kind"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
