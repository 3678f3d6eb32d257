// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Entry;

/// Cumulative balance split around one day. `todays_balance` is always
/// `previous_balance + todays_change`; entries dated after `today` belong to
/// neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodaySplit {
    pub previous_balance: i64,
    pub todays_change: i64,
    pub todays_balance: i64,
}

pub fn today_split(entries: &[Entry], today: NaiveDate) -> TodaySplit {
    let mut previous = 0i64;
    let mut change = 0i64;
    for e in entries {
        match e.date.cmp(&today) {
            Ordering::Less => previous += e.signed_amount(),
            Ordering::Equal => change += e.signed_amount(),
            Ordering::Greater => {}
        }
    }
    TodaySplit {
        previous_balance: previous,
        todays_change: change,
        todays_balance: previous + change,
    }
}
