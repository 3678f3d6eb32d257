// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::gate;
use crate::store::EntityStore;

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let new = sub.get_one::<String>("new").unwrap().trim();
            let current = sub.get_one::<String>("current").map(|s| s.trim());
            gate::set_code(store, current, new)?;
            println!("Access code updated");
        }
        _ => {}
    }
    Ok(())
}
