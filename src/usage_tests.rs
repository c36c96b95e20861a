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

#[cfg(test)]
mod tests {

    use fnv::FnvHashMap;

    use crate::{rank, recommend};
    use crate::{Entity, Options, RatingStore};
    use crate::types::RawRatings;

    #[test]
    fn programmatic_usage() {

        /* Our input data comprises of explicit ratings of items by users. The identifiers used
           can be strings of arbitrary length and structure, ratings are expected to lie in a
           scale which does not include 0.0, as 0.0 marks a missing rating by default. */
        let mut ratings = RawRatings::default();

        for &(user, item, rating) in &[
            ("alice", "apple", 4.0),
            ("alice", "dog", 2.0),
            ("alice", "pony", 5.0),
            ("bob", "apple", 4.5),
            ("bob", "pony", 4.0),
            ("charles", "pony", 1.0),
            ("charles", "bike", 3.5),
        ] {
            ratings.entry(String::from(user))
                .or_insert_with(FnvHashMap::default)
                .insert(String::from(item), rating);
        }

        /* Internally, the ratings are kept in a dense user-item matrix whose rows and columns are
           indexed by the lexicographically sorted user and item names. */
        let store = RatingStore::from(ratings);

        assert_eq!(store.user_list(), &["alice", "bob", "charles"]);
        assert_eq!(store.item_list(), &["apple", "bike", "dog", "pony"]);

        /* We can rank all users by how similar their ratings are to those of a given user. The
           user itself always comes first. */
        let similar_users = rank::similar_entities(&store, Entity::User, "bob").unwrap();

        assert_eq!(similar_users[0].name, "bob");
        for scored_user in similar_users.iter() {
            println!("{} is {:.3} similar to bob", scored_user.name, scored_user.score);
        }

        /* Predictions are made for all items a user has not rated yet, either from the ratings
           of similar users or from the user's ratings of similar items. */
        let options = Options { based: Entity::User, top_n: 1, ..Options::default() };
        let recommended_items = recommend::get_recommendations(&store, "bob", &options).unwrap();

        assert_eq!(recommended_items.len(), 1);
        assert!(store.items_not_rated_by("bob").unwrap().contains(&recommended_items[0].as_str()));

        for item in recommended_items.iter() {
            println!("Recommended for bob: {}", item);
        }
    }

}
