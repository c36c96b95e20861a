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

use std::io;

use thiserror::Error;

use crate::types::Entity;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown {kind}: {name}")]
    NotFound { kind: Entity, name: String },

    #[error("user {user} has not rated item {item}")]
    RatingNotFound { user: String, item: String },

    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("unsupported metric: {0}")]
    UnsupportedMetric(String),

    #[error("unsupported entity kind: {0}")]
    UnsupportedEntity(String),

    /// Raised instead of returning the mean of an empty set, so that "never rated anything"
    /// is not confused with "rated everything as the missing value".
    #[error("no ratings to average for {0}")]
    NoRatings(String),

    #[error("no recommendations were computed for user {0}")]
    Unfinished(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {

    pub fn not_found(kind: Entity, name: &str) -> Self {
        Error::NotFound { kind, name: name.to_string() }
    }
}
