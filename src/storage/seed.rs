use crate::model::{Appearance, Character, Episode, FriendLink, Planet};

use super::database::StarWarsDb;

/// Populates the canonical trilogy data set. Idempotent: a database that
/// already has characters is left untouched.
///
/// Edge vectors are in insertion order and that order is observable
/// through the API, so the friend lists below must not be reshuffled.
pub fn ensure_seed_data(db: &mut StarWarsDb) {
    if !db.characters.all().is_empty() {
        return;
    }

    db.planets.insert(Planet::new(1, "Tatooine"));
    db.planets.insert(Planet::new(2, "Alderaan"));

    db.episodes.insert(Episode::new(4, "NEWHOPE", Some(2001)));
    db.episodes.insert(Episode::new(5, "EMPIRE", Some(1000)));
    db.episodes.insert(Episode::new(6, "JEDI", Some(2001)));

    db.characters
        .insert(Character::human(1000, "Luke Skywalker", Some(1)));
    db.characters
        .insert(Character::human(1001, "Darth Vader", Some(1)));
    db.characters.insert(Character::human(1002, "Han Solo", None));
    db.characters
        .insert(Character::human(1003, "Leia Organa", Some(2)));
    db.characters
        .insert(Character::human(1004, "Wilhuff Tarkin", None));

    db.characters
        .insert(Character::droid(2000, "C-3PO", "Protocol"));
    db.characters
        .insert(Character::droid(2001, "R2-D2", "Astromech"));

    // Friendships are directed; Tarkin never reciprocates Vader's edge.
    friends(db, 1000, &[1002, 1003, 2000, 2001]);
    friends(db, 1001, &[1004]);
    friends(db, 1002, &[1000, 1003, 2001]);
    friends(db, 1003, &[1000, 1002, 2000, 2001]);
    friends(db, 2000, &[1000, 1002, 1003, 2001]);
    friends(db, 2001, &[1000, 1002, 1003]);

    appearances(db, 1000, &[4, 5, 6]);
    appearances(db, 1001, &[4, 5, 6]);
    appearances(db, 1002, &[4, 5, 6]);
    appearances(db, 1003, &[4, 5, 6]);
    appearances(db, 1004, &[4]);
    appearances(db, 2000, &[4, 5, 6]);
    appearances(db, 2001, &[4, 5, 6]);
}

fn friends(db: &mut StarWarsDb, character_id: i32, friend_ids: &[i32]) {
    for &friend_id in friend_ids {
        db.friend_links.push(FriendLink {
            character_id,
            friend_id,
        });
    }
}

fn appearances(db: &mut StarWarsDb, character_id: i32, episode_ids: &[i32]) {
    for &episode_id in episode_ids {
        db.appearances.push(Appearance {
            character_id,
            episode_id,
        });
    }
}
