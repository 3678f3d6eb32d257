// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger aggregation: pure functions of `(entries, people, today)`. Nothing
//! in here touches storage or the clock; callers pass a store snapshot and an
//! explicit date so every result is reproducible.

pub mod feed;
pub mod search;
pub mod split;
pub mod window;
