// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod error;
pub mod models;
pub mod vocab;
pub mod store;
pub mod gate;
pub mod engine;
pub mod utils;
pub mod commands;
