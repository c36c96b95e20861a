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

//! Rating prediction from similarity-weighted neighbor ratings.
//!
//! For user-based prediction the neighbors of a `(user, item)` cell are the other users who rated
//! the item, weighted by their similarity to the user. For item-based prediction they are the other
//! items the user rated, weighted by their similarity to the item. Both use the same formula
//!
//! ```text
//! prediction = offset(target) + Σ s·(r - offset(neighbor)) / Σ|s|
//! ```
//!
//! where the offset depends on the centering in use. A cell without usable evidence (no neighbor,
//! or all similarities zero) is predicted as its offset alone.

use crate::error::Result;
use crate::config::Options;
use crate::similarity::Metric;
use crate::store::RatingStore;
use crate::types::{by_descending_score, Entity, Predictions, ScoredName};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Centering {
    /// Plain weighted average of the raw ratings
    Raw,
    /// Centered on the mean rating of the user (user-based) or item (item-based)
    Mean,
    /// Centered on `avg(user) + avg(item) - global average`
    Baseline(f64),
}

impl Centering {

    fn offset(&self, store: &RatingStore, based: Entity, user: &str, item: &str) -> Result<f64> {
        match *self {
            Centering::Raw => Ok(0.0),
            Centering::Mean => match based {
                Entity::User => store.average_rating(Entity::User, user),
                Entity::Item => store.average_rating(Entity::Item, item),
            },
            Centering::Baseline(global_average) => {
                let user_average = store.average_rating(Entity::User, user)?;
                let item_average = store.average_rating(Entity::Item, item)?;
                Ok(user_average + item_average - global_average)
            },
        }
    }
}

#[derive(Default)]
struct WeightedAverage {
    weighted_sum: f64,
    sum_of_abs_similarities: f64,
}

impl WeightedAverage {

    fn add(&mut self, similarity: f64, rating: f64) {
        self.weighted_sum += similarity * rating;
        self.sum_of_abs_similarities += similarity.abs();
    }

    fn value(&self) -> f64 {
        if self.sum_of_abs_similarities != 0.0 {
            self.weighted_sum / self.sum_of_abs_similarities
        } else {
            0.0
        }
    }
}

/// Predicts a score for every item the user has not rated. With `debiasing`, neighbor ratings
/// are centered on the neighbor's mean rating and the target's own mean is added back.
pub fn predict_ratings(
    store: &RatingStore,
    user: &str,
    based: Entity,
    metric: Metric,
    debiasing: bool,
) -> Result<Predictions> {

    let centering = if debiasing { Centering::Mean } else { Centering::Raw };
    predict(store, user, based, metric, centering)
}

/// Like `predict_ratings`, but centers every cell on its baseline estimate
/// `avg(user) + avg(item) - global average` instead of a single mean.
pub fn predict_ratings_with_baseline(
    store: &RatingStore,
    user: &str,
    based: Entity,
    metric: Metric,
) -> Result<Predictions> {

    let global_average = store.global_average()?;
    predict(store, user, based, metric, Centering::Baseline(global_average))
}

fn predict(
    store: &RatingStore,
    user: &str,
    based: Entity,
    metric: Metric,
    centering: Centering,
) -> Result<Predictions> {

    let unrated_items = store.items_not_rated_by(user)?;

    // A user without any rating has no mean to center on
    if centering != Centering::Raw {
        store.average_rating(Entity::User, user)?;
    }

    let mut predictions = Predictions::with_capacity_and_hasher(
        unrated_items.len(), Default::default());

    for item in unrated_items {

        let mut average = WeightedAverage::default();

        match based {
            Entity::User => {
                // by definition, the user is not among them
                for other_user in store.users_who_rated(item)? {
                    let similarity =
                        store.similarity_by_name(Entity::User, user, other_user, metric)?;
                    let rating = store.rating(other_user, item)? -
                        centering.offset(store, based, other_user, item)?;

                    average.add(similarity, rating);
                }
            },
            Entity::Item => {
                for other_item in store.items_rated_by(user)? {
                    let similarity =
                        store.similarity_by_name(Entity::Item, item, other_item, metric)?;
                    let rating = store.rating(user, other_item)? -
                        centering.offset(store, based, user, other_item)?;

                    average.add(similarity, rating);
                }
            },
        }

        let prediction = centering.offset(store, based, user, item)? + average.value();

        debug!("{}-based prediction for ({}, {}): {}", based, user, item, prediction);

        predictions.insert(item.to_string(), prediction);
    }

    Ok(predictions)
}

/// Unrated items for the user with their predicted scores, best first. Equal scores are ordered by
/// item name. Holds at most `options.top_n` entries unless `top_n` is 0.
pub fn get_scored_recommendations(
    store: &RatingStore,
    user: &str,
    options: &Options,
) -> Result<Vec<ScoredName>> {

    let predictions =
        predict_ratings(store, user, options.based, options.metric, options.debiasing)?;

    let mut scored_items: Vec<ScoredName> = predictions.into_iter()
        .map(|(name, score)| ScoredName { name, score })
        .collect();

    scored_items.sort_by(|a, b| by_descending_score(a, b).then_with(|| a.name.cmp(&b.name)));

    if options.top_n != 0 {
        scored_items.truncate(options.top_n);
    }

    Ok(scored_items)
}

pub fn get_recommendations(
    store: &RatingStore,
    user: &str,
    options: &Options,
) -> Result<Vec<String>> {

    let recommended_items = get_scored_recommendations(store, user, options)?
        .into_iter()
        .map(|scored_item| scored_item.name)
        .collect();

    Ok(recommended_items)
}
