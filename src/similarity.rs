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

//! Similarity functions between rating vectors.
//!
//! All functions operate on vectors of matching length and fail with
//! [`Error::DimensionMismatch`](crate::error::Error::DimensionMismatch) otherwise. Degenerate inputs (a constant
//! vector for Pearson, no comparable dimension for the missing-value aware variant) score 0 instead
//! of failing.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::utils;

/// The closed set of supported similarity metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Euclidean,
    Pearson,
}

impl Metric {

    pub fn score(&self, v1: &[f64], v2: &[f64]) -> Result<f64> {
        match *self {
            Metric::Euclidean => euclidean_similarity(v1, v2),
            Metric::Pearson => pearson_correlation(v1, v2),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Euclidean
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "euclidean" => Ok(Metric::Euclidean),
            "pearson" => Ok(Metric::Pearson),
            _ => Err(Error::UnsupportedMetric(name.to_string())),
        }
    }
}

fn check_dimensions(v1: &[f64], v2: &[f64]) -> Result<()> {
    if v1.len() != v2.len() {
        return Err(Error::DimensionMismatch { left: v1.len(), right: v2.len() });
    }
    Ok(())
}

pub fn euclidean_distance(v1: &[f64], v2: &[f64]) -> Result<f64> {
    check_dimensions(v1, v2)?;

    let squared_sum: f64 = v1.iter()
        .zip(v2.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    Ok(squared_sum.sqrt())
}

/// `1 / (1 + d)` for the euclidean distance `d`, in `(0, 1]` with 1 only for identical vectors.
pub fn euclidean_similarity(v1: &[f64], v2: &[f64]) -> Result<f64> {
    Ok(1.0 / (1.0 + euclidean_distance(v1, v2)?))
}

/// Sample correlation coefficient, 0 if either vector has zero variance.
pub fn pearson_correlation(v1: &[f64], v2: &[f64]) -> Result<f64> {
    check_dimensions(v1, v2)?;

    let (mean1, mean2) = match (utils::mean(v1), utils::mean(v2)) {
        (Some(mean1), Some(mean2)) => (mean1, mean2),
        _ => return Ok(0.0),
    };

    let mut covariance = 0.0;
    let mut variance1 = 0.0;
    let mut variance2 = 0.0;

    for (a, b) in v1.iter().zip(v2.iter()) {
        let diff1 = a - mean1;
        let diff2 = b - mean2;
        covariance += diff1 * diff2;
        variance1 += diff1 * diff1;
        variance2 += diff2 * diff2;
    }

    let square_denominator = variance1 * variance2;

    if square_denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(covariance / square_denominator.sqrt())
}

pub fn similarity(v1: &[f64], v2: &[f64], metric: Metric) -> Result<f64> {
    metric.score(v1, v2)
}

/// Similarity restricted to the dimensions where neither vector holds `missing_value`. Scores 0
/// if there is no such dimension.
pub fn similarity_with_missing(
    v1: &[f64],
    v2: &[f64],
    metric: Metric,
    missing_value: f64,
) -> Result<f64> {

    check_dimensions(v1, v2)?;

    let (present1, present2): (Vec<f64>, Vec<f64>) = v1.iter()
        .zip(v2.iter())
        .filter(|&(a, b)| *a != missing_value && *b != missing_value)
        .map(|(a, b)| (*a, *b))
        .unzip();

    if present1.is_empty() {
        return Ok(0.0);
    }

    similarity(&present1, &present2, metric)
}
