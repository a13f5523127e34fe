use async_graphql::{Context, Enum, Interface, Object};

use crate::model::{self, CharacterKind};

use super::schema::{character_repo, planet_repo};

/// One film of the original trilogy.
#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum Episode {
    Newhope,
    Empire,
    Jedi,
}

impl Episode {
    pub fn id(self) -> i32 {
        match self {
            Episode::Newhope => 4,
            Episode::Empire => 5,
            Episode::Jedi => 6,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            4 => Some(Episode::Newhope),
            5 => Some(Episode::Empire),
            6 => Some(Episode::Jedi),
            _ => None,
        }
    }
}

/// A character of the saga: either a human or a droid. The concrete type
/// is picked from the model discriminator, so fragments and `__typename`
/// see `Human` or `Droid`, never the interface itself.
#[derive(Interface)]
#[graphql(
    field(name = "id", ty = "i32", desc = "The id of the character."),
    field(name = "name", ty = "&str", desc = "The name of the character."),
    field(name = "friends", ty = "Vec<Character>"),
    field(name = "appears_in", ty = "Vec<Episode>", desc = "Which movie they appear in.")
)]
pub enum Character {
    Human(Human),
    Droid(Droid),
}

impl From<model::Character> for Character {
    fn from(character: model::Character) -> Self {
        match character.kind {
            CharacterKind::Human { home_planet } => Character::Human(Human {
                id: character.id,
                name: character.name,
                home_planet_id: home_planet,
            }),
            CharacterKind::Droid { primary_function } => Character::Droid(Droid {
                id: character.id,
                name: character.name,
                primary_function,
            }),
        }
    }
}

pub struct Human {
    id: i32,
    name: String,
    home_planet_id: Option<i32>,
}

impl Human {
    pub fn from_character(character: model::Character) -> Option<Self> {
        match Character::from(character) {
            Character::Human(human) => Some(human),
            Character::Droid(_) => None,
        }
    }
}

#[Object]
impl Human {
    /// The id of the human.
    async fn id(&self) -> i32 {
        self.id
    }

    /// The name of the human.
    async fn name(&self) -> &str {
        &self.name
    }

    /// This human's friends, in the order the friendships were recorded.
    async fn friends(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Character>> {
        let repo = character_repo(ctx);
        Ok(repo
            .get_friends(self.id)?
            .into_iter()
            .map(Character::from)
            .collect())
    }

    /// Which movie they appear in.
    async fn appears_in(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Episode>> {
        let repo = character_repo(ctx);
        Ok(repo
            .get_episodes(self.id)?
            .into_iter()
            .filter_map(|episode| Episode::from_id(episode.id))
            .collect())
    }

    /// The home planet of the human.
    async fn home_planet(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        let Some(planet_id) = self.home_planet_id else {
            return Ok(None);
        };
        let repo = planet_repo(ctx);
        Ok(repo.get(planet_id)?.map(|planet| planet.name))
    }
}

/// A mechanical creature in the Star Wars universe.
pub struct Droid {
    id: i32,
    name: String,
    primary_function: Option<String>,
}

impl Droid {
    pub fn from_character(character: model::Character) -> Option<Self> {
        match Character::from(character) {
            Character::Droid(droid) => Some(droid),
            Character::Human(_) => None,
        }
    }
}

#[Object]
impl Droid {
    /// The id of the droid.
    async fn id(&self) -> i32 {
        self.id
    }

    /// The name of the droid.
    async fn name(&self) -> &str {
        &self.name
    }

    /// This droid's friends, in the order the friendships were recorded.
    async fn friends(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Character>> {
        let repo = character_repo(ctx);
        Ok(repo
            .get_friends(self.id)?
            .into_iter()
            .map(Character::from)
            .collect())
    }

    /// Which movie they appear in.
    async fn appears_in(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Episode>> {
        let repo = character_repo(ctx);
        Ok(repo
            .get_episodes(self.id)?
            .into_iter()
            .filter_map(|episode| Episode::from_id(episode.id))
            .collect())
    }

    /// The primary function of the droid.
    async fn primary_function(&self) -> Option<&str> {
        self.primary_function.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_enum_maps_to_seed_ids() {
        assert_eq!(Episode::Newhope.id(), 4);
        assert_eq!(Episode::Empire.id(), 5);
        assert_eq!(Episode::Jedi.id(), 6);
        assert!(matches!(Episode::from_id(5), Some(Episode::Empire)));
        assert!(Episode::from_id(7).is_none());
    }

    #[test]
    fn character_conversion_follows_the_discriminator() {
        let luke = model::Character::human(1000, "Luke Skywalker", Some(1));
        let r2d2 = model::Character::droid(2001, "R2-D2", "Astromech");

        assert!(matches!(Character::from(luke), Character::Human(_)));
        assert!(matches!(Character::from(r2d2), Character::Droid(_)));
    }

    #[test]
    fn variant_constructors_reject_the_other_kind() {
        let luke = model::Character::human(1000, "Luke Skywalker", Some(1));
        let r2d2 = model::Character::droid(2001, "R2-D2", "Astromech");

        assert!(Human::from_character(r2d2).is_none());
        assert!(Droid::from_character(luke).is_none());
    }
}
