// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::{search, split, window};
use crate::store::EntityStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table, today};
use crate::vocab;

pub fn handle(store: &EntityStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("weekly", sub)) => weekly(store, sub)?,
        Some(("today", sub)) => today_report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn report_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s),
        None => Ok(today()),
    }
}

#[derive(Serialize)]
struct SummaryReport {
    date: String,
    #[serde(flatten)]
    split: split::TodaySplit,
    #[serde(flatten)]
    totals: window::PeriodTotals,
    weekly_balance: i64,
    yearly_balance: i64,
}

fn summary(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = report_date(sub)?;
    let snapshot = store.snapshot()?;
    let split = split::today_split(&snapshot.entries, date);
    let (totals, _) = window::window_totals(&snapshot.entries, date);

    let report = SummaryReport {
        date: date.to_string(),
        split,
        totals,
        weekly_balance: totals.weekly_balance(),
        yearly_balance: totals.yearly_balance(),
    };
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let rows = vec![
            vec!["Previous balance".into(), split.previous_balance.to_string()],
            vec!["Change today".into(), split.todays_change.to_string()],
            vec!["Balance today".into(), split.todays_balance.to_string()],
            vec!["Weekly income".into(), totals.weekly_income.to_string()],
            vec!["Weekly expense".into(), totals.weekly_expense.to_string()],
            vec!["Weekly balance".into(), totals.weekly_balance().to_string()],
            vec!["Yearly income".into(), totals.yearly_income.to_string()],
            vec!["Yearly expense".into(), totals.yearly_expense.to_string()],
            vec!["Yearly balance".into(), totals.yearly_balance().to_string()],
        ];
        println!("Summary for {}", date);
        println!("{}", pretty_table(&["Item", "Amount"], rows));
    }
    Ok(())
}

fn weekly(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = report_date(sub)?;
    let snapshot = store.snapshot()?;
    let (totals, breakdown) = window::window_totals(&snapshot.entries, date);

    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &breakdown)? {
        // Vocabulary order, not map order
        let mut rows: Vec<Vec<String>> = vocab::RECURRING_CATEGORIES
            .iter()
            .map(|c| vec![c.to_string(), breakdown.recurring[c].to_string()])
            .collect();
        rows.push(vec![vocab::MISSIONS.into(), breakdown.missions.to_string()]);
        rows.push(vec![
            vocab::BUILDING_FUND.into(),
            breakdown.building_fund.to_string(),
        ]);
        rows.push(vec![
            "total weekly income".into(),
            totals.weekly_income.to_string(),
        ]);
        println!(
            "Week of {} to {}",
            window::week_start(date),
            date
        );
        println!("{}", pretty_table(&["Category", "Amount"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct TodayReport {
    date: String,
    income: i64,
    expense: i64,
}

fn today_report(store: &EntityStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = report_date(sub)?;
    let snapshot = store.snapshot()?;
    let (income, expense) = search::todays_totals(&snapshot.entries, date);

    let report = TodayReport {
        date: date.to_string(),
        income,
        expense,
    };
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let rows = vec![
            vec!["Income".into(), income.to_string()],
            vec!["Expense".into(), expense.to_string()],
        ];
        println!("Totals for {}", date);
        println!("{}", pretty_table(&["Item", "Amount"], rows));
    }
    Ok(())
}
