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

use fnv::{FnvHashMap, FnvHashSet};

use crate::error::{Error, Result};
use crate::types::{Entity, RawRatings};

/// Bidirectional mapping between user and item names and their consecutive zero-based indices.
/// Names are sorted lexicographically before indices are assigned, so index order (and therefore
/// the iteration order of every ranking) does not depend on the hashing of the source.
pub struct DataDictionary {
    user_list: Vec<String>,
    item_list: Vec<String>,
    user_dict: FnvHashMap<String, usize>,
    item_dict: FnvHashMap<String, usize>,
    num_ratings: u64,
}

impl DataDictionary {

    pub fn num_users(&self) -> usize {
        self.user_list.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_list.len()
    }

    pub fn num_ratings(&self) -> u64 {
        self.num_ratings
    }

    pub fn user_list(&self) -> &[String] {
        &self.user_list
    }

    pub fn item_list(&self) -> &[String] {
        &self.item_list
    }

    pub fn names(&self, kind: Entity) -> &[String] {
        match kind {
            Entity::User => self.user_list(),
            Entity::Item => self.item_list(),
        }
    }

    pub fn user_index(&self, name: &str) -> Result<usize> {
        self.user_dict.get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(Entity::User, name))
    }

    pub fn item_index(&self, name: &str) -> Result<usize> {
        self.item_dict.get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(Entity::Item, name))
    }

    pub fn user_name(&self, user_index: usize) -> &str {
        &self.user_list[user_index]
    }

    pub fn item_name(&self, item_index: usize) -> &str {
        &self.item_list[item_index]
    }
}

fn sorted_with_indices(names: FnvHashSet<&str>) -> (Vec<String>, FnvHashMap<String, usize>) {

    let mut list: Vec<String> = names.into_iter().map(String::from).collect();
    list.sort();

    let mut dict: FnvHashMap<String, usize> =
        FnvHashMap::with_capacity_and_hasher(list.len(), Default::default());

    for (index, name) in list.iter().enumerate() {
        dict.insert(name.clone(), index);
    }

    (list, dict)
}

impl<'a> From<&'a RawRatings> for DataDictionary {

    fn from(ratings: &'a RawRatings) -> Self {

        let mut user_names: FnvHashSet<&str> =
            FnvHashSet::with_capacity_and_hasher(ratings.len(), Default::default());
        let mut item_names: FnvHashSet<&str> =
            FnvHashSet::with_capacity_and_hasher(100, Default::default());

        let mut num_ratings: u64 = 0;

        for (user, ratings_of_user) in ratings.iter() {
            user_names.insert(user.as_str());

            for item in ratings_of_user.keys() {
                item_names.insert(item.as_str());
                num_ratings += 1;
            }
        }

        let (user_list, user_dict) = sorted_with_indices(user_names);
        let (item_list, item_dict) = sorted_with_indices(item_names);

        DataDictionary { user_list, item_list, user_dict, item_dict, num_ratings }
    }
}

#[cfg(test)]
mod tests {

    use fnv::FnvHashMap;
    use crate::stats::DataDictionary;
    use crate::types::{Entity, RawRatings};
    use crate::error::Error;

    fn ratings() -> RawRatings {
        let mut ratings = RawRatings::default();

        let mut carol = FnvHashMap::default();
        carol.insert(String::from("pony"), 4.0);
        carol.insert(String::from("apple"), 2.0);
        ratings.insert(String::from("carol"), carol);

        let mut alice = FnvHashMap::default();
        alice.insert(String::from("dog"), 5.0);
        ratings.insert(String::from("alice"), alice);

        ratings
    }

    #[test]
    fn sorted_consecutive_indices() {
        let ratings = ratings();
        let data_dict = DataDictionary::from(&ratings);

        assert_eq!(data_dict.num_users(), 2);
        assert_eq!(data_dict.num_items(), 3);
        assert_eq!(data_dict.num_ratings(), 3);

        assert_eq!(data_dict.user_list(), &["alice", "carol"]);
        assert_eq!(data_dict.names(Entity::Item), &["apple", "dog", "pony"]);

        assert_eq!(data_dict.user_index("carol").unwrap(), 1);
        assert_eq!(data_dict.item_index("pony").unwrap(), 2);
        assert_eq!(data_dict.item_name(1), "dog");
        assert_eq!(data_dict.user_name(0), "alice");
    }

    #[test]
    fn unknown_names() {
        let ratings = ratings();
        let data_dict = DataDictionary::from(&ratings);

        match data_dict.user_index("bob") {
            Err(Error::NotFound { kind, name }) => {
                assert_eq!(kind, Entity::User);
                assert_eq!(name, "bob");
            },
            other => panic!("unexpected result {:?}", other),
        }

        assert!(data_dict.item_index("bike").is_err());
    }
}
