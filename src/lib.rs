/*
 * critics
 * Copyright (C) 2018 The critics developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! User- and item-based collaborative filtering over an explicit ratings matrix.
//!
//! A [`RatingStore`](store::RatingStore) is built once from a nested `user -> item -> rating`
//! mapping. Similar entities are ranked with [`rank`], unrated items are predicted and ranked with
//! [`recommend`], and [`batch`] computes recommendations for all users in parallel.

extern crate csv;
extern crate fnv;
extern crate scoped_pool;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;
#[macro_use]
extern crate tracing;

pub mod error;
pub mod types;
pub mod utils;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod rank;
pub mod recommend;
pub mod batch;
pub mod config;
pub mod io;

mod usage_tests;

pub use crate::config::Options;
pub use crate::error::{Error, Result};
pub use crate::similarity::Metric;
pub use crate::store::RatingStore;
pub use crate::types::{Entity, ScoredName};
