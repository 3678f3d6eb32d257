// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Entry, EntryKind};
use crate::vocab;

/// Week-to-date and year-to-date sums. The balances are derived, never
/// stored, so they cannot drift from `income - expense`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub weekly_income: i64,
    pub weekly_expense: i64,
    pub yearly_income: i64,
    pub yearly_expense: i64,
}

impl PeriodTotals {
    pub fn weekly_balance(&self) -> i64 {
        self.weekly_income - self.weekly_expense
    }

    pub fn yearly_balance(&self) -> i64 {
        self.yearly_income - self.yearly_expense
    }
}

/// Weekly income by category. Every recurring category is present from
/// construction so lookups never miss; missions and building fund are
/// tracked on their own, outside the recurring set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBreakdown {
    pub recurring: BTreeMap<&'static str, i64>,
    pub missions: i64,
    pub building_fund: i64,
}

impl WeeklyBreakdown {
    fn new() -> Self {
        WeeklyBreakdown {
            recurring: vocab::RECURRING_CATEGORIES.iter().map(|c| (*c, 0)).collect(),
            missions: 0,
            building_fund: 0,
        }
    }
}

/// Most recent Sunday on or before `day` (Sunday counts as weekday 0).
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// January 1 of `day`'s year.
pub fn year_start(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), 1, 1).unwrap_or(day)
}

/// Accumulate both windows in one pass. The windows are independent: a week
/// straddling New Year still counts fully toward the weekly totals even
/// though its old-year days fall outside the yearly window.
pub fn window_totals(entries: &[Entry], today: NaiveDate) -> (PeriodTotals, WeeklyBreakdown) {
    let week = week_start(today);
    let year = year_start(today);
    let mut totals = PeriodTotals::default();
    let mut breakdown = WeeklyBreakdown::new();

    for e in entries {
        if e.amount <= 0 || e.date > today {
            continue;
        }
        if e.date >= year {
            match e.kind {
                EntryKind::Income => totals.yearly_income += e.amount,
                EntryKind::Expense => totals.yearly_expense += e.amount,
            }
        }
        if e.date >= week {
            match e.kind {
                EntryKind::Income => {
                    totals.weekly_income += e.amount;
                    if let Some(slot) = breakdown.recurring.get_mut(e.category.as_str()) {
                        *slot += e.amount;
                    } else if e.category == vocab::MISSIONS {
                        breakdown.missions += e.amount;
                    } else if e.category == vocab::BUILDING_FUND {
                        breakdown.building_fund += e.amount;
                    }
                }
                EntryKind::Expense => totals.weekly_expense += e.amount,
            }
        }
    }
    (totals, breakdown)
}
