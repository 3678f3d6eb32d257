// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use offertory::engine::window::{week_start, window_totals, year_start};
use offertory::models::{Entry, EntryKind};
use offertory::vocab;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn income(id: i64, date: &str, category: &str, amount: i64) -> Entry {
    Entry {
        id,
        kind: EntryKind::Income,
        date: d(date),
        category: category.to_string(),
        amount,
        person_id: Some(1),
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

#[test]
fn week_starts_on_the_most_recent_sunday() {
    // 2024-01-07 was a Sunday.
    assert_eq!(week_start(d("2024-01-07")), d("2024-01-07"));
    assert_eq!(week_start(d("2024-01-10")), d("2024-01-07"));
    assert_eq!(week_start(d("2024-01-13")), d("2024-01-07"));
    assert_eq!(week_start(d("2024-01-14")), d("2024-01-14"));
}

#[test]
fn year_starts_on_january_first() {
    assert_eq!(year_start(d("2024-06-15")), d("2024-01-01"));
    assert_eq!(year_start(d("2024-01-01")), d("2024-01-01"));
}

#[test]
fn sunday_is_inside_the_week_saturday_before_is_not() {
    let entries = vec![
        income(1, "2024-01-07", "tithe", 100),
        income(2, "2024-01-06", "tithe", 40),
    ];

    let (totals, breakdown) = window_totals(&entries, d("2024-01-10"));

    assert_eq!(totals.weekly_income, 100);
    assert_eq!(totals.yearly_income, 140);
    assert_eq!(breakdown.recurring["tithe"], 100);
}

#[test]
fn january_first_is_inside_the_year_december_is_not() {
    let entries = vec![
        income(1, "2024-01-01", "tithe", 100),
        income(2, "2023-12-31", "tithe", 40),
    ];

    let (totals, _) = window_totals(&entries, d("2024-01-10"));

    assert_eq!(totals.yearly_income, 100);
}

#[test]
fn week_spanning_new_year_counts_fully_toward_weekly() {
    // 2025-01-01 was a Wednesday; its week started Sunday 2024-12-29.
    let entries = vec![
        income(1, "2024-12-30", "tithe", 50),
        income(2, "2025-01-01", "tithe", 20),
        expense(3, "2024-12-31", "heating", 10),
    ];

    let (totals, breakdown) = window_totals(&entries, d("2025-01-01"));

    assert_eq!(totals.weekly_income, 70);
    assert_eq!(totals.weekly_expense, 10);
    assert_eq!(totals.weekly_balance(), 60);
    assert_eq!(totals.yearly_income, 20);
    assert_eq!(totals.yearly_expense, 0);
    assert_eq!(totals.yearly_balance(), 20);
    assert_eq!(breakdown.recurring["tithe"], 70);
}

#[test]
fn future_entries_count_nowhere() {
    let entries = vec![income(1, "2024-01-08", "tithe", 100)];

    let (totals, breakdown) = window_totals(&entries, d("2024-01-07"));

    assert_eq!(totals.weekly_income, 0);
    assert_eq!(totals.yearly_income, 0);
    assert_eq!(breakdown.recurring["tithe"], 0);
}

#[test]
fn breakdown_always_carries_all_recurring_keys() {
    let (_, breakdown) = window_totals(&[], d("2024-01-07"));

    assert_eq!(breakdown.recurring.len(), vocab::RECURRING_CATEGORIES.len());
    for category in vocab::RECURRING_CATEGORIES {
        assert_eq!(breakdown.recurring[category], 0);
    }
    assert_eq!(breakdown.missions, 0);
    assert_eq!(breakdown.building_fund, 0);
}

#[test]
fn breakdown_sums_recurring_and_special_categories() {
    let entries = vec![
        income(1, "2024-01-07", "tithe", 1000),
        income(2, "2024-01-07", "sunday offering", 200),
        income(3, "2024-01-07", "missions", 50),
        income(4, "2024-01-07", "building fund", 70),
        income(5, "2024-01-07", "interest", 30),
        income(6, "2024-01-07", "other", 15),
        expense(7, "2024-01-07", "utilities", 300),
    ];

    let (totals, breakdown) = window_totals(&entries, d("2024-01-07"));

    assert_eq!(breakdown.recurring["tithe"], 1000);
    assert_eq!(breakdown.recurring["sunday offering"], 200);
    assert_eq!(breakdown.recurring["thanksgiving offering"], 0);
    assert_eq!(breakdown.missions, 50);
    assert_eq!(breakdown.building_fund, 70);
    // Interest and other land in the plain weekly income, not the breakdown.
    assert_eq!(totals.weekly_income, 1365);
    assert_eq!(totals.weekly_expense, 300);
    assert_eq!(totals.weekly_balance(), 1065);
}

#[test]
fn breakdown_only_sees_the_current_week() {
    let entries = vec![
        income(1, "2024-01-06", "tithe", 500),
        income(2, "2024-01-08", "tithe", 100),
    ];

    let (totals, breakdown) = window_totals(&entries, d("2024-01-10"));

    assert_eq!(breakdown.recurring["tithe"], 100);
    assert_eq!(totals.weekly_income, 100);
    assert_eq!(totals.yearly_income, 600);
}

#[test]
fn empty_ledger_is_all_zero() {
    let (totals, _) = window_totals(&[], d("2024-01-07"));

    assert_eq!(totals.weekly_income, 0);
    assert_eq!(totals.weekly_expense, 0);
    assert_eq!(totals.yearly_income, 0);
    assert_eq!(totals.yearly_expense, 0);
    assert_eq!(totals.weekly_balance(), 0);
    assert_eq!(totals.yearly_balance(), 0);
}
