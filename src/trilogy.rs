//! Hero lookup across the trilogy.
//!
//! Every episode may designate its own hero; when no episode is named, or
//! the named episode has no hero on record, the saga-wide default wins.

use crate::error::Result;
use crate::model::Character;
use crate::storage::{DroidRepository, EpisodeRepository, SharedDb};

/// R2-D2. Fixed at seed time and never regenerated.
const SAGA_HERO_ID: i32 = 2001;

pub struct TrilogyHeroes {
    episodes: EpisodeRepository,
    droids: DroidRepository,
}

impl TrilogyHeroes {
    pub fn new(db: SharedDb) -> Self {
        Self {
            episodes: EpisodeRepository::new(db.clone()),
            droids: DroidRepository::new(db),
        }
    }

    /// The hero of the given episode, or of the whole saga when `episode_id`
    /// is `None`. A missing hero resolves to `None` rather than an error.
    pub fn get_hero(&self, episode_id: Option<i32>) -> Result<Option<Character>> {
        if let Some(id) = episode_id {
            tracing::debug!(episode_id = id, "hero lookup");
            if let Some(loaded) = self.episodes.get_with_hero(id)? {
                if let Some(hero) = loaded.hero {
                    return Ok(Some(hero));
                }
            }
            // Unknown episode or unset hero: fall through to the default.
        }

        self.droids.get(SAGA_HERO_ID)
    }
}
