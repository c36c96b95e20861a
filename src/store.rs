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

//! The dense rating matrix together with its name indices.
//!
//! Rows are users, columns are items. Absent `(user, item)` pairs hold the store's missing value
//! sentinel (0.0 by default). The sentinel is compared by value, so it must lie outside of the
//! rating scale in use: a legitimate rating equal to the sentinel is indistinguishable from no
//! rating at all. This is not checked at construction.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::similarity::{self, Metric};
use crate::stats::DataDictionary;
use crate::types::{self, DenseVector, Entity, RawRatings};
use crate::utils;

pub const DEFAULT_MISSING_VALUE: f64 = 0.0;

/// Read-only snapshot of a ratings source. A changed dataset requires building a new store.
pub struct RatingStore {
    ratings: RawRatings,
    data_dict: DataDictionary,
    matrix: Vec<DenseVector>,
    missing_value: f64,
}

impl RatingStore {

    pub fn new(ratings: RawRatings, missing_value: f64) -> Self {

        // First pass: the universe of names and their indices
        let data_dict = DataDictionary::from(&ratings);

        // Second pass: fill the cells, everything else stays missing
        let mut matrix: Vec<DenseVector> = (0..data_dict.num_users())
            .map(|_| types::new_dense_vector(data_dict.num_items(), missing_value))
            .collect();

        for (user, ratings_of_user) in ratings.iter() {
            if let Ok(user_index) = data_dict.user_index(user) {
                let row = &mut matrix[user_index];

                for (item, rating) in ratings_of_user.iter() {
                    if let Ok(item_index) = data_dict.item_index(item) {
                        row[item_index] = *rating;
                    }
                }
            }
        }

        info!(
            "Loaded {} ratings between {} users and {} items.",
            data_dict.num_ratings(),
            data_dict.num_users(),
            data_dict.num_items(),
        );

        RatingStore { ratings, data_dict, matrix, missing_value }
    }

    pub fn missing_value(&self) -> f64 {
        self.missing_value
    }

    pub fn dictionary(&self) -> &DataDictionary {
        &self.data_dict
    }

    pub fn raw_ratings(&self) -> &RawRatings {
        &self.ratings
    }

    pub fn user_list(&self) -> &[String] {
        self.data_dict.user_list()
    }

    pub fn item_list(&self) -> &[String] {
        self.data_dict.item_list()
    }

    pub fn names(&self, kind: Entity) -> &[String] {
        self.data_dict.names(kind)
    }

    pub fn ratings_for_user(&self, name: &str) -> Result<&[f64]> {
        let user_index = self.data_dict.user_index(name)?;
        Ok(&self.matrix[user_index])
    }

    pub fn ratings_for_item(&self, name: &str) -> Result<DenseVector> {
        let item_index = self.data_dict.item_index(name)?;
        Ok(self.matrix.iter().map(|row| row[item_index]).collect())
    }

    pub fn ratings_for_entity(&self, kind: Entity, name: &str) -> Result<Cow<'_, [f64]>> {
        match kind {
            Entity::User => self.ratings_for_user(name).map(Cow::Borrowed),
            Entity::Item => self.ratings_for_item(name).map(Cow::Owned),
        }
    }

    /// Exact rating lookup in the ratings source.
    pub fn rating(&self, user: &str, item: &str) -> Result<f64> {
        let ratings_of_user = self.ratings.get(user)
            .ok_or_else(|| Error::not_found(Entity::User, user))?;

        ratings_of_user.get(item)
            .cloned()
            .ok_or_else(|| Error::RatingNotFound {
                user: user.to_string(),
                item: item.to_string(),
            })
    }

    pub fn items_not_rated_by(&self, user: &str) -> Result<Vec<&str>> {
        self.items_of_user(user, false)
    }

    pub fn items_rated_by(&self, user: &str) -> Result<Vec<&str>> {
        self.items_of_user(user, true)
    }

    fn items_of_user(&self, user: &str, rated: bool) -> Result<Vec<&str>> {
        let missing_value = self.missing_value;

        let items = self.ratings_for_user(user)?.iter()
            .enumerate()
            .filter(|&(_, rating)| (*rating != missing_value) == rated)
            .map(|(item_index, _)| self.data_dict.item_name(item_index))
            .collect();

        Ok(items)
    }

    pub fn users_who_rated(&self, item: &str) -> Result<Vec<&str>> {
        let item_index = self.data_dict.item_index(item)?;

        let users = self.matrix.iter()
            .enumerate()
            .filter(|&(_, row)| row[item_index] != self.missing_value)
            .map(|(user_index, _)| self.data_dict.user_name(user_index))
            .collect();

        Ok(users)
    }

    /// Mean over the full row (or column). Missing cells count with the sentinel value, see the
    /// module documentation. Fails if the entity has no rating at all.
    pub fn average_rating(&self, kind: Entity, name: &str) -> Result<f64> {
        let ratings = self.ratings_for_entity(kind, name)?;
        self.checked_mean(&ratings, || format!("{} {}", kind, name))
    }

    /// Mean over all cells of the matrix, with the same convention as `average_rating`.
    pub fn global_average(&self) -> Result<f64> {
        let cells: Vec<f64> = self.matrix.iter()
            .flat_map(|row| row.iter().cloned())
            .collect();

        self.checked_mean(&cells, || String::from("the rating matrix"))
    }

    fn checked_mean<F>(&self, ratings: &[f64], describe: F) -> Result<f64>
        where F: FnOnce() -> String {

        if ratings.iter().all(|rating| *rating == self.missing_value) {
            return Err(Error::NoRatings(describe()));
        }

        utils::mean(ratings).ok_or_else(|| Error::NoRatings(describe()))
    }

    /// Missing value aware similarity between two named entities of the same kind.
    pub fn similarity_by_name(
        &self,
        kind: Entity,
        name: &str,
        other_name: &str,
        metric: Metric,
    ) -> Result<f64> {

        let v1 = self.ratings_for_entity(kind, name)?;
        let v2 = self.ratings_for_entity(kind, other_name)?;

        similarity::similarity_with_missing(&v1, &v2, metric, self.missing_value)
    }
}

impl From<RawRatings> for RatingStore {
    fn from(ratings: RawRatings) -> Self {
        RatingStore::new(ratings, DEFAULT_MISSING_VALUE)
    }
}


#[cfg(test)]
mod tests {

    use fnv::FnvHashMap;
    use crate::error::Error;
    use crate::similarity::Metric;
    use crate::store::RatingStore;
    use crate::types::{Entity, RawRatings};
    use crate::io;

    pub fn small_store() -> RatingStore {
        let mut ratings = RawRatings::default();

        let mut a = FnvHashMap::default();
        a.insert(String::from("x"), 5.0);
        a.insert(String::from("y"), 3.0);
        ratings.insert(String::from("A"), a);

        let mut b = FnvHashMap::default();
        b.insert(String::from("x"), 4.0);
        ratings.insert(String::from("B"), b);

        RatingStore::from(ratings)
    }

    fn critics_store() -> RatingStore {
        let ratings = io::ratings_from_json(concat!(env!("CARGO_MANIFEST_DIR"), "/data/critics.json"))
            .unwrap();
        RatingStore::from(ratings)
    }

    fn close_enough_to(value: f64, expected: f64) -> bool {
        (value - expected).abs() < 1e-9
    }

    #[test]
    fn matrix_and_indices() {
        let store = small_store();

        assert_eq!(store.user_list(), &["A", "B"]);
        assert_eq!(store.item_list(), &["x", "y"]);
        assert_eq!(store.ratings_for_user("A").unwrap(), &[5.0, 3.0]);
        assert_eq!(store.ratings_for_user("B").unwrap(), &[4.0, 0.0]);
        assert_eq!(store.ratings_for_item("x").unwrap(), vec![5.0, 4.0]);
        assert_eq!(&*store.ratings_for_entity(Entity::Item, "y").unwrap(), &[3.0, 0.0]);
        assert_eq!(&*store.ratings_for_entity(Entity::User, "A").unwrap(), &[5.0, 3.0]);
    }

    #[test]
    fn rated_and_unrated() {
        let store = small_store();

        assert_eq!(store.items_not_rated_by("B").unwrap(), vec!["y"]);
        assert_eq!(store.items_rated_by("B").unwrap(), vec!["x"]);
        assert!(store.items_not_rated_by("A").unwrap().is_empty());
        assert_eq!(store.users_who_rated("y").unwrap(), vec!["A"]);
        assert_eq!(store.users_who_rated("x").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn unknown_names_are_not_found() {
        let store = small_store();

        match store.ratings_for_user("C") {
            Err(Error::NotFound { kind, name }) => {
                assert_eq!(kind, Entity::User);
                assert_eq!(name, "C");
            },
            other => panic!("unexpected result {:?}", other),
        }

        assert!(store.ratings_for_item("z").is_err());
        assert!(store.items_not_rated_by("C").is_err());
        assert!(store.users_who_rated("z").is_err());
        assert!(store.average_rating(Entity::Item, "z").is_err());
    }

    #[test]
    fn exact_ratings() {
        let store = small_store();

        assert_eq!(store.rating("A", "y").unwrap(), 3.0);

        match store.rating("B", "y") {
            Err(Error::RatingNotFound { user, item }) => {
                assert_eq!(user, "B");
                assert_eq!(item, "y");
            },
            other => panic!("unexpected result {:?}", other),
        }

        assert!(store.rating("C", "x").is_err());
    }

    #[test]
    fn averages_include_missing_cells() {
        let store = small_store();

        assert!(close_enough_to(store.average_rating(Entity::User, "B").unwrap(), 2.0));
        assert!(close_enough_to(store.average_rating(Entity::Item, "x").unwrap(), 4.5));
        assert!(close_enough_to(store.global_average().unwrap(), 3.0));
    }

    #[test]
    fn no_ratings_to_average() {
        let ratings = io::ratings_from_json(
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/ratings_special_user.json")).unwrap();
        let store = RatingStore::from(ratings);

        let user = store.user_list()[0].clone();

        match store.average_rating(Entity::User, &user) {
            Err(Error::NoRatings(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(store.global_average().is_err());
    }

    #[test]
    fn custom_missing_value() {
        let mut ratings = RawRatings::default();
        let mut a = FnvHashMap::default();
        a.insert(String::from("x"), 0.0);
        ratings.insert(String::from("A"), a);

        let mut b = FnvHashMap::default();
        b.insert(String::from("y"), 1.0);
        ratings.insert(String::from("B"), b);

        let store = RatingStore::new(ratings, -1.0);

        assert_eq!(store.ratings_for_user("A").unwrap(), &[0.0, -1.0]);
        assert_eq!(store.items_rated_by("A").unwrap(), vec!["x"]);
        assert_eq!(store.items_not_rated_by("A").unwrap(), vec!["y"]);
    }

    #[test]
    fn critics_matrix() {
        let store = critics_store();

        assert_eq!(store.user_list().len(), 7);
        assert_eq!(store.item_list().len(), 6);
        assert_eq!(store.user_list()[4], "Michael Phillips");
        assert_eq!(store.item_list()[0], "Just My Luck");

        // no user or item without a single rating
        for user in store.user_list() {
            assert!(!store.items_rated_by(user).unwrap().is_empty());
            let average = store.average_rating(Entity::User, user).unwrap();
            assert!(average > 0.0 && average <= 5.0);
        }
        for item in store.item_list() {
            let users = store.users_who_rated(item).unwrap();
            assert!(!users.is_empty());

            for user in users {
                let rating = store.rating(user, item).unwrap();
                assert!(1.0 <= rating && rating <= 5.0);
            }
        }

        assert!(close_enough_to(
            store.average_rating(Entity::User, "Claudia Puig").unwrap(), 17.5 / 6.0));
    }

    #[test]
    fn similarity_by_name() {
        let store = critics_store();
        let users = store.user_list();

        let score = store.similarity_by_name(
            Entity::User, &users[0], &users[users.len() - 1], Metric::Euclidean).unwrap();
        assert!(-1.0 <= score && score <= 1.0);

        let score = store.similarity_by_name(
            Entity::User, "Toby", "Mick LaSalle", Metric::Euclidean).unwrap();
        assert!(close_enough_to(score, 0.4));

        assert!(store.similarity_by_name(Entity::User, "Toby", "Nobody", Metric::Pearson).is_err());
    }
}
