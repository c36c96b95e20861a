/**
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

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::similarity::Metric;
use crate::store::DEFAULT_MISSING_VALUE;
use crate::types::Entity;

/// Settings for similarity computation and prediction. Every field is optional in a JSON config
/// file; absent fields take their default.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Sentinel for "no rating recorded", must lie outside of the rating scale. Only read when a
    /// `RatingStore` is built from these options; prediction and ranking always use the sentinel
    /// the store was built with.
    pub missing_value: f64,
    pub metric: Metric,
    /// Mean-center neighbor ratings and add the target's own mean back.
    pub debiasing: bool,
    /// Maximum number of recommendations per user, 0 for all of them.
    pub top_n: usize,
    pub based: Entity,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            missing_value: DEFAULT_MISSING_VALUE,
            metric: Metric::Euclidean,
            debiasing: true,
            top_n: 0,
            based: Entity::User,
        }
    }
}

impl Options {

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let options = serde_json::from_reader(reader)?;
        Ok(options)
    }
}
