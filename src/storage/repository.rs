use std::cell::RefCell;

use crate::error::Result;
use crate::model::{Character, CharacterRelation, Episode, Planet};

use super::database::{Entity, SharedDb, StarWarsDb, read_db, write_db};

fn entity_name<T>() -> &'static str {
    std::any::type_name::<T>().rsplit("::").next().unwrap_or("?")
}

enum Pending<T> {
    Add(T),
    Update(T),
    Delete(i32),
}

/// Unit-of-work CRUD over one table.
///
/// `add`/`update`/`delete` stage operations; nothing touches the shared
/// database until [`save_changes`](Repository::save_changes) commits them.
/// Missing ids read back as `None`, they are not errors.
pub struct Repository<T: Entity> {
    db: SharedDb,
    pending: RefCell<Vec<Pending<T>>>,
}

impl<T: Entity> Repository<T> {
    pub fn new(db: SharedDb) -> Self {
        Self {
            db,
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<T>> {
        tracing::debug!(entity = entity_name::<T>(), id, "get");
        let db = read_db(&self.db)?;
        Ok(T::table(&db).get(id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<T>> {
        tracing::debug!(entity = entity_name::<T>(), "get all");
        let db = read_db(&self.db)?;
        Ok(T::table(&db).all().to_vec())
    }

    pub fn add(&self, entity: T) -> T {
        self.pending.borrow_mut().push(Pending::Add(entity.clone()));
        entity
    }

    pub fn update(&self, entity: T) {
        self.pending.borrow_mut().push(Pending::Update(entity));
    }

    pub fn delete(&self, id: i32) {
        self.pending.borrow_mut().push(Pending::Delete(id));
    }

    /// Commits staged operations and reports whether any row changed.
    pub fn save_changes(&self) -> Result<bool> {
        let ops = self.pending.take();
        if ops.is_empty() {
            return Ok(false);
        }

        let mut db = write_db(&self.db)?;
        let mut changed = 0usize;
        for op in ops {
            let applied = match op {
                Pending::Add(entity) => T::table_mut(&mut db).insert(entity),
                Pending::Update(entity) => T::table_mut(&mut db).update(entity),
                Pending::Delete(id) => T::table_mut(&mut db).remove(id),
            };
            if applied {
                changed += 1;
            }
        }

        tracing::info!(entity = entity_name::<T>(), changed, "save changes");
        Ok(changed > 0)
    }
}

/// A character together with whichever relations were eagerly resolved.
/// Unrequested relations stay empty.
#[derive(Debug, Clone)]
pub struct LoadedCharacter {
    pub character: Character,
    pub friends: Vec<Character>,
    pub episodes: Vec<Episode>,
    pub home_planet: Option<Planet>,
}

/// Repository over all characters regardless of variant, plus the two
/// derived relation queries the type graph resolves lazily.
pub struct CharacterRepository {
    base: Repository<Character>,
    db: SharedDb,
}

impl CharacterRepository {
    pub fn new(db: SharedDb) -> Self {
        Self {
            base: Repository::new(db.clone()),
            db,
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<Character>> {
        self.base.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Character>> {
        self.base.get_all()
    }

    pub fn add(&self, character: Character) -> Character {
        self.base.add(character)
    }

    pub fn update(&self, character: Character) {
        self.base.update(character)
    }

    pub fn delete(&self, id: i32) {
        self.base.delete(id)
    }

    pub fn save_changes(&self) -> Result<bool> {
        self.base.save_changes()
    }

    /// Outgoing friend edges from this id, in edge insertion order.
    /// An unknown id yields an empty list, not an error.
    pub fn get_friends(&self, id: i32) -> Result<Vec<Character>> {
        tracing::debug!(id, "get friends");
        let db = read_db(&self.db)?;
        Ok(friends_of(&db, id))
    }

    /// Episodes this character appears in, in edge insertion order.
    pub fn get_episodes(&self, id: i32) -> Result<Vec<Episode>> {
        tracing::debug!(id, "get episodes");
        let db = read_db(&self.db)?;
        Ok(episodes_of(&db, id))
    }

    /// Like [`get`](Self::get), but resolves the requested relations in
    /// the same read.
    pub fn get_loaded(
        &self,
        id: i32,
        relations: &[CharacterRelation],
    ) -> Result<Option<LoadedCharacter>> {
        let db = read_db(&self.db)?;
        let Some(character) = db.characters.get(id).cloned() else {
            return Ok(None);
        };

        let mut loaded = LoadedCharacter {
            character,
            friends: Vec::new(),
            episodes: Vec::new(),
            home_planet: None,
        };
        for relation in relations {
            match relation {
                CharacterRelation::Friends => loaded.friends = friends_of(&db, id),
                CharacterRelation::Episodes => loaded.episodes = episodes_of(&db, id),
                CharacterRelation::HomePlanet => {
                    loaded.home_planet = loaded
                        .character
                        .home_planet()
                        .and_then(|planet_id| db.planets.get(planet_id).cloned());
                }
            }
        }
        Ok(Some(loaded))
    }
}

fn friends_of(db: &StarWarsDb, id: i32) -> Vec<Character> {
    db.friend_links
        .iter()
        .filter(|link| link.character_id == id)
        .filter_map(|link| db.characters.get(link.friend_id).cloned())
        .collect()
}

fn episodes_of(db: &StarWarsDb, id: i32) -> Vec<Episode> {
    db.appearances
        .iter()
        .filter(|row| row.character_id == id)
        .filter_map(|row| db.episodes.get(row.episode_id).cloned())
        .collect()
}

/// Characters narrowed to the human variant. A droid id reads as `None`.
pub struct HumanRepository {
    characters: CharacterRepository,
}

impl HumanRepository {
    pub fn new(db: SharedDb) -> Self {
        Self {
            characters: CharacterRepository::new(db),
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<Character>> {
        Ok(self.characters.get(id)?.filter(Character::is_human))
    }

    pub fn get_all(&self) -> Result<Vec<Character>> {
        Ok(self
            .characters
            .get_all()?
            .into_iter()
            .filter(Character::is_human)
            .collect())
    }

    pub fn get_loaded(
        &self,
        id: i32,
        relations: &[CharacterRelation],
    ) -> Result<Option<LoadedCharacter>> {
        Ok(self
            .characters
            .get_loaded(id, relations)?
            .filter(|loaded| loaded.character.is_human()))
    }

    pub fn add(&self, human: Character) -> Character {
        self.characters.add(human)
    }

    pub fn update(&self, human: Character) {
        self.characters.update(human)
    }

    pub fn delete(&self, id: i32) {
        self.characters.delete(id)
    }

    pub fn save_changes(&self) -> Result<bool> {
        self.characters.save_changes()
    }
}

/// Characters narrowed to the droid variant. A human id reads as `None`.
pub struct DroidRepository {
    characters: CharacterRepository,
}

impl DroidRepository {
    pub fn new(db: SharedDb) -> Self {
        Self {
            characters: CharacterRepository::new(db),
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<Character>> {
        Ok(self.characters.get(id)?.filter(Character::is_droid))
    }

    pub fn get_all(&self) -> Result<Vec<Character>> {
        Ok(self
            .characters
            .get_all()?
            .into_iter()
            .filter(Character::is_droid)
            .collect())
    }

    pub fn get_loaded(
        &self,
        id: i32,
        relations: &[CharacterRelation],
    ) -> Result<Option<LoadedCharacter>> {
        Ok(self
            .characters
            .get_loaded(id, relations)?
            .filter(|loaded| loaded.character.is_droid()))
    }

    pub fn add(&self, droid: Character) -> Character {
        self.characters.add(droid)
    }

    pub fn update(&self, droid: Character) {
        self.characters.update(droid)
    }

    pub fn delete(&self, id: i32) {
        self.characters.delete(id)
    }

    pub fn save_changes(&self) -> Result<bool> {
        self.characters.save_changes()
    }
}

/// An episode with its designated hero resolved.
#[derive(Debug, Clone)]
pub struct LoadedEpisode {
    pub episode: Episode,
    pub hero: Option<Character>,
}

pub struct EpisodeRepository {
    base: Repository<Episode>,
    db: SharedDb,
}

impl EpisodeRepository {
    pub fn new(db: SharedDb) -> Self {
        Self {
            base: Repository::new(db.clone()),
            db,
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<Episode>> {
        self.base.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Episode>> {
        self.base.get_all()
    }

    pub fn get_with_hero(&self, id: i32) -> Result<Option<LoadedEpisode>> {
        let db = read_db(&self.db)?;
        let Some(episode) = db.episodes.get(id).cloned() else {
            return Ok(None);
        };
        let hero = episode
            .hero
            .and_then(|hero_id| db.characters.get(hero_id).cloned());
        Ok(Some(LoadedEpisode { episode, hero }))
    }

    /// Cast of an episode via the appearance join rows, in row order.
    pub fn get_characters(&self, id: i32) -> Result<Vec<Character>> {
        let db = read_db(&self.db)?;
        Ok(db
            .appearances
            .iter()
            .filter(|row| row.episode_id == id)
            .filter_map(|row| db.characters.get(row.character_id).cloned())
            .collect())
    }

    pub fn add(&self, episode: Episode) -> Episode {
        self.base.add(episode)
    }

    pub fn update(&self, episode: Episode) {
        self.base.update(episode)
    }

    pub fn delete(&self, id: i32) {
        self.base.delete(id)
    }

    pub fn save_changes(&self) -> Result<bool> {
        self.base.save_changes()
    }
}

pub struct PlanetRepository {
    base: Repository<Planet>,
    db: SharedDb,
}

impl PlanetRepository {
    pub fn new(db: SharedDb) -> Self {
        Self {
            base: Repository::new(db.clone()),
            db,
        }
    }

    pub fn get(&self, id: i32) -> Result<Option<Planet>> {
        self.base.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Planet>> {
        self.base.get_all()
    }

    /// Humans whose home world is this planet, in table order.
    pub fn get_humans(&self, id: i32) -> Result<Vec<Character>> {
        let db = read_db(&self.db)?;
        Ok(db
            .characters
            .all()
            .iter()
            .filter(|character| character.home_planet() == Some(id))
            .cloned()
            .collect())
    }

    pub fn add(&self, planet: Planet) -> Planet {
        self.base.add(planet)
    }

    pub fn update(&self, planet: Planet) {
        self.base.update(planet)
    }

    pub fn delete(&self, id: i32) {
        self.base.delete(id)
    }

    pub fn save_changes(&self) -> Result<bool> {
        self.base.save_changes()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use super::*;
    use crate::model::CharacterKind;

    fn seeded() -> SharedDb {
        Arc::new(RwLock::new(StarWarsDb::seeded()))
    }

    fn names(characters: &[Character]) -> Vec<&str> {
        characters.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn returns_r2d2_given_id_2001() {
        let repo = CharacterRepository::new(seeded());

        let character = repo.get(2001).unwrap().unwrap();

        assert_eq!(character.name, "R2-D2");
        assert!(character.is_droid());
    }

    #[test]
    fn returns_r2d2_friends_and_episodes_in_seed_order() {
        let repo = CharacterRepository::new(seeded());

        let friends = repo.get_friends(2001).unwrap();
        let episodes = repo.get_episodes(2001).unwrap();

        assert_eq!(names(&friends), ["Luke Skywalker", "Han Solo", "Leia Organa"]);
        let titles: Vec<_> = episodes.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["NEWHOPE", "EMPIRE", "JEDI"]);
    }

    #[test]
    fn returns_luke_friends_in_seed_order() {
        let repo = CharacterRepository::new(seeded());

        let friends = repo.get_friends(1000).unwrap();

        assert_eq!(
            names(&friends),
            ["Han Solo", "Leia Organa", "C-3PO", "R2-D2"]
        );
    }

    #[test]
    fn unknown_character_has_empty_relations() {
        let repo = CharacterRepository::new(seeded());

        assert!(repo.get(99999).unwrap().is_none());
        assert!(repo.get_friends(99999).unwrap().is_empty());
        assert!(repo.get_episodes(99999).unwrap().is_empty());
    }

    #[test]
    fn tarkin_friendship_stays_one_directional() {
        let repo = CharacterRepository::new(seeded());

        let vader_friends = repo.get_friends(1001).unwrap();
        let tarkin_friends = repo.get_friends(1004).unwrap();

        assert_eq!(names(&vader_friends), ["Wilhuff Tarkin"]);
        assert!(tarkin_friends.is_empty());
    }

    #[test]
    fn eager_load_resolves_only_requested_relations() {
        let repo = CharacterRepository::new(seeded());

        let loaded = repo
            .get_loaded(1000, &[CharacterRelation::HomePlanet])
            .unwrap()
            .unwrap();

        assert_eq!(loaded.character.name, "Luke Skywalker");
        assert_eq!(loaded.home_planet.unwrap().name, "Tatooine");
        assert!(loaded.friends.is_empty());
        assert!(loaded.episodes.is_empty());
    }

    #[test]
    fn eager_load_resolves_all_relations() {
        let repo = CharacterRepository::new(seeded());

        let loaded = repo
            .get_loaded(
                1000,
                &[
                    CharacterRelation::Friends,
                    CharacterRelation::Episodes,
                    CharacterRelation::HomePlanet,
                ],
            )
            .unwrap()
            .unwrap();

        assert_eq!(loaded.friends.len(), 4);
        assert_eq!(loaded.episodes.len(), 3);
        assert_eq!(loaded.home_planet.unwrap().name, "Tatooine");
    }

    #[test]
    fn human_repository_rejects_droid_ids() {
        let db = seeded();
        let humans = HumanRepository::new(db.clone());
        let droids = DroidRepository::new(db);

        assert_eq!(humans.get(1000).unwrap().unwrap().name, "Luke Skywalker");
        assert!(humans.get(2001).unwrap().is_none());
        assert_eq!(droids.get(2001).unwrap().unwrap().name, "R2-D2");
        assert!(droids.get(1000).unwrap().is_none());
    }

    #[test]
    fn droid_repository_lists_only_droids() {
        let droids = DroidRepository::new(seeded());

        let all = droids.get_all().unwrap();

        assert_eq!(names(&all), ["C-3PO", "R2-D2"]);
        assert!(all.iter().all(Character::is_droid));
    }

    #[test]
    fn returns_jedi_episode_given_id_6() {
        let repo = EpisodeRepository::new(seeded());

        let jedi = repo.get(6).unwrap().unwrap();

        assert_eq!(jedi.title, "JEDI");
    }

    #[test]
    fn episode_hero_eager_load() {
        let repo = EpisodeRepository::new(seeded());

        let empire = repo.get_with_hero(5).unwrap().unwrap();

        assert_eq!(empire.episode.title, "EMPIRE");
        assert_eq!(empire.hero.unwrap().name, "Luke Skywalker");
    }

    #[test]
    fn episode_cast_follows_appearance_rows() {
        let repo = EpisodeRepository::new(seeded());

        let newhope_cast = repo.get_characters(4).unwrap();
        let empire_cast = repo.get_characters(5).unwrap();

        assert!(names(&newhope_cast).contains(&"Wilhuff Tarkin"));
        assert!(!names(&empire_cast).contains(&"Wilhuff Tarkin"));
        assert_eq!(empire_cast.len(), 6);
    }

    #[test]
    fn returns_tatooine_given_id_1() {
        let repo = PlanetRepository::new(seeded());

        let tatooine = repo.get(1).unwrap().unwrap();

        assert_eq!(tatooine.name, "Tatooine");
    }

    #[test]
    fn planet_lists_its_humans() {
        let repo = PlanetRepository::new(seeded());

        let tatooine_humans = repo.get_humans(1).unwrap();
        let alderaan_humans = repo.get_humans(2).unwrap();

        assert_eq!(names(&tatooine_humans), ["Luke Skywalker", "Darth Vader"]);
        assert_eq!(names(&alderaan_humans), ["Leia Organa"]);
    }

    #[test]
    fn add_commits_on_save_changes() {
        let db = seeded();
        let repo = CharacterRepository::new(db.clone());

        repo.add(Character::droid(2101, "Droid2101", "Function2101"));
        let saved = repo.save_changes().unwrap();

        assert!(saved);
        let fresh = CharacterRepository::new(db);
        let droid = fresh.get(2101).unwrap().unwrap();
        assert_eq!(droid.name, "Droid2101");
        assert!(droid.is_droid());
    }

    #[test]
    fn save_changes_without_pending_ops_reports_false() {
        let repo = CharacterRepository::new(seeded());

        assert!(!repo.save_changes().unwrap());
    }

    #[test]
    fn adding_a_taken_id_changes_nothing() {
        let db = seeded();
        let repo = CharacterRepository::new(db.clone());

        repo.add(Character::droid(2001, "Impostor", "None"));
        let saved = repo.save_changes().unwrap();

        assert!(!saved);
        let fresh = CharacterRepository::new(db);
        assert_eq!(fresh.get(2001).unwrap().unwrap().name, "R2-D2");
    }

    #[test]
    fn update_commits_on_save_changes() {
        let db = seeded();
        let repo = CharacterRepository::new(db.clone());

        let mut threepio = repo.get(2000).unwrap().unwrap();
        threepio.name = "Character2000".to_string();
        repo.update(threepio);
        let saved = repo.save_changes().unwrap();

        assert!(saved);
        let fresh = CharacterRepository::new(db);
        assert_eq!(fresh.get(2000).unwrap().unwrap().name, "Character2000");
    }

    #[test]
    fn delete_commits_on_save_changes() {
        let db = seeded();
        let repo = PlanetRepository::new(db.clone());

        repo.add(Planet::new(102, "Planet102"));
        assert!(repo.save_changes().unwrap());

        repo.delete(102);
        assert!(repo.save_changes().unwrap());

        let fresh = PlanetRepository::new(db);
        assert!(fresh.get(102).unwrap().is_none());
    }

    #[test]
    fn deleting_a_missing_id_changes_nothing() {
        let repo = PlanetRepository::new(seeded());

        repo.delete(999);

        assert!(!repo.save_changes().unwrap());
    }

    #[test]
    fn updated_human_keeps_its_variant() {
        let db = seeded();
        let repo = HumanRepository::new(db.clone());

        let mut vader = repo.get(1001).unwrap().unwrap();
        vader.name = "Human1001".to_string();
        repo.update(vader);
        assert!(repo.save_changes().unwrap());

        let fresh = HumanRepository::new(db);
        let updated = fresh.get(1001).unwrap().unwrap();
        assert_eq!(updated.name, "Human1001");
        assert!(matches!(updated.kind, CharacterKind::Human { .. }));
    }
}
