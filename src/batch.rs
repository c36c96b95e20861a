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

use std::cmp;
use std::sync::Mutex;
use std::time::Instant;

use scoped_pool::Pool;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::recommend;
use crate::store::RatingStore;
use crate::types::UserRecommendations;
use crate::utils;

/// Computes recommendations for every user of the store on a pool of `pool_size` threads. Each
/// user is an independent task with read-only access to the store. Results are returned in the
/// order of the store's user list; the first user (in that order) whose recommendations fail
/// fails the whole batch.
pub fn recommend_all(
    store: &RatingStore,
    options: &Options,
    pool_size: usize,
) -> Result<Vec<UserRecommendations>> {

    let pool = Pool::new(cmp::max(pool_size, 1));

    let users = store.user_list();

    let slots: Vec<Mutex<Option<Result<Vec<String>>>>> = users.iter()
        .map(|_| Mutex::new(None))
        .collect();

    let batch_start = Instant::now();

    pool.scoped(|scope| {
        for (user, slot) in users.iter().zip(slots.iter()) {

            scope.execute(move|| {
                let recommended_items = recommend::get_recommendations(store, user, options);

                // only this task ever locks its slot
                let mut slot = slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                *slot = Some(recommended_items);
            });
        }
    });

    pool.shutdown();

    let duration_for_batch = utils::to_millis(batch_start.elapsed());
    info!("Computed {}-based recommendations for {} users in {}ms",
        options.based, users.len(), duration_for_batch);

    merge(users, slots)
}

/// Pairs each user with the content of its slot. A slot left empty fails the batch.
fn merge(
    users: &[String],
    slots: Vec<Mutex<Option<Result<Vec<String>>>>>,
) -> Result<Vec<UserRecommendations>> {

    let mut recommendations = Vec::with_capacity(users.len());

    for (user, slot) in users.iter().zip(slots.into_iter()) {
        let outcome = slot.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());

        let recommended_items = match outcome {
            Some(recommended_items) => recommended_items?,
            None => return Err(Error::Unfinished(user.clone())),
        };

        recommendations.push(UserRecommendations {
            for_user: user.clone(),
            recommended_items,
        });
    }

    Ok(recommendations)
}
