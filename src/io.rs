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

use std::io::prelude::*;
use std::io::{stdout, BufReader};
use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::types::{RawRatings, UserRecommendations};

/// Reads a JSON document of shape `{"user": {"item": rating, ...}, ...}`.
pub fn ratings_from_json<P: AsRef<Path>>(path: P) -> Result<RawRatings> {
    let file = File::open(path)?;
    ratings_from_json_reader(BufReader::new(file))
}

pub fn ratings_from_json_reader<R: Read>(reader: R) -> Result<RawRatings> {
    let ratings = serde_json::from_reader(reader)?;
    Ok(ratings)
}

fn csv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).delimiter(b'\t');
    builder
}

/// Reads a CSV input file. We expect NO headers, and a user-item-rating triple per line
/// with tab separation.
pub fn csv_reader<P: AsRef<Path>>(file: P) -> Result<csv::Reader<File>> {
    let reader = csv_reader_builder().from_path(file)?;
    Ok(reader)
}

/// Collects the triples of a CSV reader. A later rating for the same user and item replaces the
/// earlier one.
pub fn ratings_from_csv<R: Read>(reader: &mut csv::Reader<R>) -> Result<RawRatings> {

    let mut ratings = RawRatings::default();

    for record in reader.deserialize() {
        let (user, item, rating): (String, String, f64) = record?;

        ratings.entry(user)
            .or_insert_with(Default::default)
            .insert(item, rating);
    }

    Ok(ratings)
}

/// Reads ratings from JSON if the path ends in `.json`, from tab separated triples otherwise.
pub fn read_ratings<P: AsRef<Path>>(path: P) -> Result<RawRatings> {
    let path = path.as_ref();

    if path.extension().and_then(|extension| extension.to_str()) == Some("json") {
        ratings_from_json(path)
    } else {
        let mut reader = csv_reader(path)?;
        ratings_from_csv(&mut reader)
    }
}

/// Output the computed recommendations in JSON format, one user per line. If a
/// `recommendations_path` is supplied, we write to a file at the specified path, otherwise, we
/// output to stdout.
pub fn write_recommendations(
    recommendations: &[UserRecommendations],
    recommendations_path: Option<String>,
) -> Result<()> {

    let out: Box<dyn Write> = match recommendations_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    write_recommendations_to(out, recommendations)
}

pub fn write_recommendations_to<W: Write>(
    mut out: W,
    recommendations: &[UserRecommendations],
) -> Result<()> {

    for recommendations_for_user in recommendations.iter() {
        let as_json = serde_json::to_string(recommendations_for_user)?;
        write!(out, "{}\n", as_json)?;
    }

    out.flush()?;

    Ok(())
}
