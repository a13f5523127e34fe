use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::storage::{CharacterRepository, DroidRepository, HumanRepository, PlanetRepository, SharedDb};
use crate::trilogy::TrilogyHeroes;

use super::types::{Character, Droid, Episode, Human};

pub type HolonetSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

struct AppState {
    db: SharedDb,
}

pub fn build_schema(db: SharedDb) -> HolonetSchema {
    let state = Arc::new(AppState { db });

    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .data(state)
        .finish()
}

// Repositories are per-resolver-call: nothing mutable is shared between
// requests beyond the database handle itself.
fn db(ctx: &Context<'_>) -> SharedDb {
    ctx.data::<Arc<AppState>>().unwrap().db.clone()
}

pub(super) fn character_repo(ctx: &Context<'_>) -> CharacterRepository {
    CharacterRepository::new(db(ctx))
}

pub(super) fn planet_repo(ctx: &Context<'_>) -> PlanetRepository {
    PlanetRepository::new(db(ctx))
}

fn parse_id(raw: &str) -> async_graphql::Result<i32> {
    raw.parse()
        .map_err(|_| async_graphql::Error::new(format!("invalid character id: {raw:?}")))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The hero of an episode, or of the whole saga.
    async fn hero(
        &self,
        ctx: &Context<'_>,
        #[graphql(
            desc = "If omitted, returns the hero of the whole saga. If provided, returns the hero of that particular episode."
        )]
        episode: Option<Episode>,
    ) -> async_graphql::Result<Option<Character>> {
        let heroes = TrilogyHeroes::new(db(ctx));
        Ok(heroes
            .get_hero(episode.map(Episode::id))?
            .map(Character::from))
    }

    /// A single human by id.
    async fn human(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the human")] id: String,
    ) -> async_graphql::Result<Option<Human>> {
        let id = parse_id(&id)?;
        let repo = HumanRepository::new(db(ctx));
        Ok(repo.get(id)?.and_then(Human::from_character))
    }

    /// A single droid by id.
    async fn droid(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the droid")] id: String,
    ) -> async_graphql::Result<Option<Droid>> {
        let id = parse_id(&id)?;
        let repo = DroidRepository::new(db(ctx));
        Ok(repo.get(id)?.and_then(Droid::from_character))
    }
}
