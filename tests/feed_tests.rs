// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use offertory::engine::feed::display_feed;
use offertory::models::{Entry, EntryKind, Person};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn income(id: i64, date: &str, category: &str, amount: i64, person_id: Option<i64>) -> Entry {
    Entry {
        id,
        kind: EntryKind::Income,
        date: d(date),
        category: category.to_string(),
        amount,
        person_id,
        note: None,
    }
}

fn expense(id: i64, date: &str, category: &str, amount: i64) -> Entry {
    Entry {
        id,
        kind: EntryKind::Expense,
        date: d(date),
        category: category.to_string(),
        amount,
        person_id: None,
        note: None,
    }
}

fn member(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        position: "member".to_string(),
    }
}

#[test]
fn running_balances_survive_the_reversal() {
    let people = vec![member(1, "Kim Haneul")];
    let entries = vec![
        income(1, "2024-01-07", "tithe", 1000, Some(1)),
        expense(2, "2024-01-07", "utilities", 300),
        income(3, "2024-01-06", "tithe", 500, Some(1)),
    ];

    let feed = display_feed(&entries, &people);

    // Newest first: the Jan 7 expense leads, the Jan 6 tithe closes. Each
    // line keeps the balance it had in chronological order.
    let ids: Vec<i64> = feed.iter().map(|l| l.entry.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    let balances: Vec<i64> = feed.iter().map(|l| l.balance).collect();
    assert_eq!(balances, vec![1200, 1500, 500]);
}

#[test]
fn expense_displays_before_income_within_a_day() {
    let entries = vec![
        income(1, "2024-03-03", "tithe", 100, None),
        expense(2, "2024-03-03", "utilities", 40),
    ];

    let feed = display_feed(&entries, &[]);

    assert_eq!(feed[0].entry.id, 2);
    assert_eq!(feed[0].balance, 60);
    assert_eq!(feed[1].entry.id, 1);
    assert_eq!(feed[1].balance, 100);
}

#[test]
fn income_displays_in_category_priority_order() {
    let entries = vec![
        income(1, "2024-03-03", "other", 10, None),
        income(2, "2024-03-03", "sunday offering", 20, None),
        income(3, "2024-03-03", "tithe", 30, None),
    ];

    let feed = display_feed(&entries, &[]);

    let ids: Vec<i64> = feed.iter().map(|l| l.entry.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    let balances: Vec<i64> = feed.iter().map(|l| l.balance).collect();
    assert_eq!(balances, vec![60, 30, 10]);
}

#[test]
fn unknown_income_category_displays_after_other() {
    let entries = vec![
        income(1, "2024-03-03", "mystery gift", 5, None),
        income(2, "2024-03-03", "other", 7, None),
    ];

    let feed = display_feed(&entries, &[]);

    assert_eq!(feed[0].entry.category, "other");
    assert_eq!(feed[1].entry.category, "mystery gift");
}

#[test]
fn same_category_displays_person_names_ascending() {
    let people = vec![member(1, "Park Jisoo"), member(2, "Ahn Sori")];
    let entries = vec![
        income(1, "2024-03-03", "tithe", 100, Some(1)),
        income(2, "2024-03-03", "tithe", 50, Some(2)),
    ];

    let feed = display_feed(&entries, &people);

    // Ahn before Park in the display; Park's tithe came first in the
    // chronological walk so it carries the smaller balance.
    assert_eq!(feed[0].entry.person_id, Some(2));
    assert_eq!(feed[0].balance, 150);
    assert_eq!(feed[1].entry.person_id, Some(1));
    assert_eq!(feed[1].balance, 100);
}

#[test]
fn dangling_person_sorts_under_the_sentinel_name() {
    let people = vec![member(1, "Yun Dara")];
    let entries = vec![
        income(1, "2024-03-03", "tithe", 10, Some(9)),
        income(2, "2024-03-03", "tithe", 20, Some(1)),
    ];

    let feed = display_feed(&entries, &people);

    // "Yun Dara" < "unspecified" in plain string order, so the named
    // contributor displays first.
    assert_eq!(feed[0].entry.id, 2);
    assert_eq!(feed[0].balance, 30);
    assert_eq!(feed[1].entry.id, 1);
    assert_eq!(feed[1].balance, 10);
}

#[test]
fn entry_id_breaks_remaining_ties() {
    let entries = vec![
        expense(10, "2024-03-03", "utilities", 5),
        expense(11, "2024-03-03", "utilities", 7),
    ];

    let feed = display_feed(&entries, &[]);

    assert_eq!(feed[0].entry.id, 11);
    assert_eq!(feed[0].balance, -12);
    assert_eq!(feed[1].entry.id, 10);
    assert_eq!(feed[1].balance, -5);
}

#[test]
fn feed_is_independent_of_input_order() {
    let people = vec![member(1, "Kim Haneul"), member(2, "Seo Yuna")];
    let scrambled = vec![
        expense(4, "2024-02-11", "utilities", 120),
        income(1, "2024-02-04", "tithe", 300, Some(1)),
        income(5, "2024-02-11", "sunday offering", 45, Some(2)),
        income(2, "2024-02-04", "tithe", 200, Some(2)),
        income(3, "2024-02-11", "tithe", 250, Some(7)),
    ];
    let mut reversed = scrambled.clone();
    reversed.reverse();

    assert_eq!(
        display_feed(&scrambled, &people),
        display_feed(&reversed, &people)
    );
}

#[test]
fn balances_replay_as_prefix_sums() {
    let people = vec![member(1, "Kim Haneul")];
    let entries = vec![
        income(1, "2024-02-04", "tithe", 300, Some(1)),
        expense(2, "2024-02-05", "utilities", 80),
        income(3, "2024-02-11", "missions", 50, Some(1)),
        expense(4, "2024-02-11", "supplies", 30),
        income(5, "2024-02-18", "other", 10, None),
    ];

    let feed = display_feed(&entries, &people);

    // Walking the feed from the bottom replays chronological order, so the
    // attached balances must be its prefix sums.
    let mut running = 0i64;
    for line in feed.iter().rev() {
        running += line.entry.signed_amount();
        assert_eq!(line.balance, running);
    }
    let dates: Vec<NaiveDate> = feed.iter().rev().map(|l| l.entry.date).collect();
    let mut ordered = dates.clone();
    ordered.sort();
    assert_eq!(dates, ordered);
}

#[test]
fn empty_ledger_yields_empty_feed() {
    assert!(display_feed(&[], &[]).is_empty());
}

#[test]
fn non_positive_amount_carries_no_weight() {
    let entries = vec![
        income(1, "2024-03-03", "tithe", 100, None),
        income(2, "2024-03-04", "tithe", 0, None),
    ];

    let feed = display_feed(&entries, &[]);

    assert_eq!(feed[0].entry.id, 2);
    assert_eq!(feed[0].balance, 100);
    assert_eq!(feed[1].balance, 100);
}
