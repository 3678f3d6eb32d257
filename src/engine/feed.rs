// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Entry, EntryKind, Person, name_index, resolve_name};
use crate::vocab;

/// One line of the display feed: an entry plus the running balance over all
/// ledger history up to and including it, counted in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub balance: i64,
}

/// Build the display feed in two steps: an ascending chronological sort
/// drives the running balance, then a single reversal puts the newest
/// entries first. Balances keep their chronological values through the
/// reversal.
pub fn display_feed(entries: &[Entry], people: &[Person]) -> Vec<FeedEntry> {
    let names = name_index(people);
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by(|a, b| chronological(a, b, &names));

    let mut running = 0i64;
    let mut feed: Vec<FeedEntry> = ordered
        .into_iter()
        .map(|e| {
            running += e.signed_amount();
            FeedEntry {
                entry: e.clone(),
                balance: running,
            }
        })
        .collect();
    feed.reverse();
    feed
}

/// Ascending chronological order: date, then income before expense; two
/// incomes compare by category display rank and then person name, both
/// reversed here because the final feed reversal turns them back around.
/// The entry id closes every remaining tie, so the order is total.
fn chronological(a: &Entry, b: &Entry, names: &HashMap<i64, &str>) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| {
            if a.kind == EntryKind::Income && b.kind == EntryKind::Income {
                vocab::display_rank(&b.category)
                    .cmp(&vocab::display_rank(&a.category))
                    .then_with(|| {
                        resolve_name(names, b.person_id).cmp(&resolve_name(names, a.person_id))
                    })
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.id.cmp(&b.id))
}

fn kind_rank(kind: EntryKind) -> u8 {
    match kind {
        EntryKind::Income => 0,
        EntryKind::Expense => 1,
    }
}
