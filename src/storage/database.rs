use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{HolonetError, Result};
use crate::model::{Appearance, Character, Episode, FriendLink, Planet};

/// A row type that lives in one of the database tables.
pub trait Entity: Clone {
    fn id(&self) -> i32;
    fn table(db: &StarWarsDb) -> &Table<Self>;
    fn table_mut(db: &mut StarWarsDb) -> &mut Table<Self>;
}

/// Insertion-ordered table keyed by integer id.
///
/// Lookups scan; the seed set is a handful of rows and ids are never
/// regenerated, so ordering stability wins over index structures.
#[derive(Debug)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Entity> Table<T> {
    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Appends a row. Refused when the id is already taken.
    pub fn insert(&mut self, row: T) -> bool {
        if self.contains(row.id()) {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Replaces the row with the same id, keeping its position.
    pub fn update(&mut self, row: T) -> bool {
        match self.rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        self.rows.len() != before
    }
}

/// The whole catalog: entity tables plus the directed join rows.
#[derive(Debug, Default)]
pub struct StarWarsDb {
    pub planets: Table<Planet>,
    pub episodes: Table<Episode>,
    pub characters: Table<Character>,
    pub friend_links: Vec<FriendLink>,
    pub appearances: Vec<Appearance>,
}

impl StarWarsDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty database populated with the canonical trilogy seed set.
    pub fn seeded() -> Self {
        let mut db = Self::new();
        super::seed::ensure_seed_data(&mut db);
        db
    }
}

/// Shared handle; every logical request constructs its own repositories
/// on top of this, nothing else crosses request boundaries.
pub type SharedDb = Arc<RwLock<StarWarsDb>>;

pub(crate) fn read_db(db: &SharedDb) -> Result<RwLockReadGuard<'_, StarWarsDb>> {
    db.read()
        .map_err(|_| HolonetError::Storage("database lock poisoned".to_string()))
}

pub(crate) fn write_db(db: &SharedDb) -> Result<RwLockWriteGuard<'_, StarWarsDb>> {
    db.write()
        .map_err(|_| HolonetError::Storage("database lock poisoned".to_string()))
}

impl Entity for Planet {
    fn id(&self) -> i32 {
        self.id
    }

    fn table(db: &StarWarsDb) -> &Table<Self> {
        &db.planets
    }

    fn table_mut(db: &mut StarWarsDb) -> &mut Table<Self> {
        &mut db.planets
    }
}

impl Entity for Episode {
    fn id(&self) -> i32 {
        self.id
    }

    fn table(db: &StarWarsDb) -> &Table<Self> {
        &db.episodes
    }

    fn table_mut(db: &mut StarWarsDb) -> &mut Table<Self> {
        &mut db.episodes
    }
}

impl Entity for Character {
    fn id(&self) -> i32 {
        self.id
    }

    fn table(db: &StarWarsDb) -> &Table<Self> {
        &db.characters
    }

    fn table_mut(db: &mut StarWarsDb) -> &mut Table<Self> {
        &mut db.characters
    }
}
