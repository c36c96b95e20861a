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

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fnv::FnvHashMap;

use crate::error::Error;

pub type DenseVector = Vec<f64>;

/// The authoritative `user -> item -> rating` source the rating matrix is derived from.
pub type RawRatings = FnvHashMap<String, FnvHashMap<String, f64>>;

/// Predicted scores per item, unordered.
pub type Predictions = FnvHashMap<String, f64>;

pub fn new_dense_vector(dimensions: usize, missing_value: f64) -> DenseVector {
    vec![missing_value; dimensions]
}

/// Discriminates between the two kinds of entities of the rating matrix. Also used to select
/// between user-based and item-based prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    User,
    Item,
}

impl Entity {

    pub fn as_str(&self) -> &'static str {
        match *self {
            Entity::User => "user",
            Entity::Item => "item",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "user" => Ok(Entity::User),
            "item" => Ok(Entity::Item),
            _ => Err(Error::UnsupportedEntity(name.to_string())),
        }
    }
}

/// A named entity together with a similarity or prediction score.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ScoredName {
    pub name: String,
    pub score: f64,
}

/// Descending order by score. There is no total order on floating point numbers, so
/// incomparable scores are treated as equal.
pub fn by_descending_score(a: &ScoredName, b: &ScoredName) -> Ordering {
    match a.score.partial_cmp(&b.score) {
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Greater) => Ordering::Less,
        Some(Ordering::Equal) => Ordering::Equal,
        None => Ordering::Equal
    }
}

/// Ranked recommendations for one user.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct UserRecommendations {
    pub for_user: String,
    pub recommended_items: Vec<String>,
}
