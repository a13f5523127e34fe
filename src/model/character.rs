/// A character of the saga. Exactly one of human or droid; the concrete
/// variant travels with the row as [`CharacterKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub kind: CharacterKind,
}

/// Discriminator carrying the variant-specific columns.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterKind {
    Human { home_planet: Option<i32> },
    Droid { primary_function: Option<String> },
}

impl Character {
    pub fn human(id: i32, name: impl Into<String>, home_planet: Option<i32>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CharacterKind::Human { home_planet },
        }
    }

    pub fn droid(id: i32, name: impl Into<String>, primary_function: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CharacterKind::Droid {
                primary_function: Some(primary_function.into()),
            },
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, CharacterKind::Human { .. })
    }

    pub fn is_droid(&self) -> bool {
        matches!(self.kind, CharacterKind::Droid { .. })
    }

    /// Home planet id, for humans that have one.
    pub fn home_planet(&self) -> Option<i32> {
        match self.kind {
            CharacterKind::Human { home_planet } => home_planet,
            CharacterKind::Droid { .. } => None,
        }
    }
}

/// Directed friendship edge. Mutual friendship requires two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendLink {
    pub character_id: i32,
    pub friend_id: i32,
}

/// Directed character-appears-in-episode edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub character_id: i32,
    pub episode_id: i32,
}

/// Relations a character load may eagerly resolve. A closed set rather
/// than free-form strings, so an unknown relation cannot be spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterRelation {
    Friends,
    Episodes,
    HomePlanet,
}
