// Copyright (c) Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod people;
pub mod categories;
pub mod entries;
pub mod reports;
pub mod search;
pub mod importer;
pub mod exporter;
pub mod code;
pub mod doctor;
