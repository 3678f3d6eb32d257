// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Income categories in display-priority order. The list is closed: entry
/// capture rejects anything else, and the feed sorts income by this order.
pub const INCOME_CATEGORIES: [&str; 10] = [
    "tithe",
    "sunday offering",
    "thanksgiving offering",
    "special offering",
    "seasonal offering",
    "firstfruits offering",
    "missions",
    "building fund",
    "interest",
    "other",
];

/// The six recurring offering categories tracked one-by-one in the weekly
/// breakdown.
pub const RECURRING_CATEGORIES: [&str; 6] = [
    "tithe",
    "sunday offering",
    "thanksgiving offering",
    "special offering",
    "seasonal offering",
    "firstfruits offering",
];

/// Tracked individually in the weekly breakdown, outside the recurring set.
pub const MISSIONS: &str = "missions";
pub const BUILDING_FUND: &str = "building fund";

/// Roster positions accepted by person capture.
pub const POSITIONS: [&str; 5] = ["pastor", "evangelist", "elder", "deacon", "member"];

/// Display name for an entry whose person is missing from the roster.
pub const UNSPECIFIED: &str = "unspecified";

static RANKS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    INCOME_CATEGORIES
        .iter()
        .enumerate()
        .map(|(rank, category)| (*category, rank))
        .collect()
});

/// Rank of `category` in the display-priority list; anything outside the
/// closed list ranks after `other`.
pub fn display_rank(category: &str) -> usize {
    RANKS
        .get(category)
        .copied()
        .unwrap_or(INCOME_CATEGORIES.len())
}

pub fn is_income_category(name: &str) -> bool {
    RANKS.contains_key(name)
}

pub fn is_position(name: &str) -> bool {
    POSITIONS.contains(&name)
}
