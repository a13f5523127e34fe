/// One film of the original trilogy.
///
/// `hero` is the designated hero of the episode and stays unset until
/// assigned at seed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: i32,
    pub title: String,
    pub hero: Option<i32>,
}

impl Episode {
    pub fn new(id: i32, title: impl Into<String>, hero: Option<i32>) -> Self {
        Self {
            id,
            title: title.into(),
            hero,
        }
    }
}
