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

use crate::error::Result;
use crate::similarity::{self, Metric};
use crate::store::RatingStore;
use crate::types::{by_descending_score, Entity, ScoredName};

/// All entities of the given kind (the entity itself included), ranked by euclidean similarity
/// to the named entity.
pub fn similar_entities(store: &RatingStore, kind: Entity, name: &str) -> Result<Vec<ScoredName>> {
    similar_entities_with(store, kind, name, Metric::Euclidean)
}

/// Ranks all entities of the given kind by their similarity to the named entity, in descending
/// order. The sort is stable, so entities with equal scores remain in lexicographic name order.
pub fn similar_entities_with(
    store: &RatingStore,
    kind: Entity,
    name: &str,
    metric: Metric,
) -> Result<Vec<ScoredName>> {

    let v1 = store.ratings_for_entity(kind, name)?;

    let mut scored_names = Vec::with_capacity(store.names(kind).len());

    for other_name in store.names(kind).iter() {
        let v2 = store.ratings_for_entity(kind, other_name)?;
        let score = similarity::similarity_with_missing(&v1, &v2, metric, store.missing_value())?;

        scored_names.push(ScoredName { name: other_name.clone(), score });
    }

    scored_names.sort_by(by_descending_score);

    Ok(scored_names)
}
