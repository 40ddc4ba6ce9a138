use crate::domain::IdGenerator;
use std::fmt;

pub const DEFAULT_NAME: &str = "WORLD";

const GREETING: &str = "HELLO";

/// A single greeting, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Greeting {
    pub id: i64,
    pub content: String,
    //who we greeted, kept next to the content so links don't have to re-parse it
    #[serde(skip)]
    pub name: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GreetingError {
    #[error("greeting content `{0}` has no space between the greeting and the name")]
    MissingSeparator(String),
}

impl Greeting {
    /// Rebuilds a greeting from already formatted content, recovering the name
    /// as everything after the first space.
    pub fn parse(id: i64, content: String) -> Result<Self, GreetingError> {
        let name = match content.split_once(' ') {
            Some((_, name)) => name.to_owned(),
            None => return Err(GreetingError::MissingSeparator(content)),
        };
        Ok(Self { id, content, name })
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GreetingResponse {{id={}, '{}'}}", self.id, self.content)
    }
}

/// Formats greetings and stamps each one with a fresh id.
///
/// The server keeps exactly one of these, so ids are unique across all workers.
#[derive(Debug, Default)]
pub struct GreetingService {
    ids: IdGenerator,
}

impl GreetingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` greets [`DEFAULT_NAME`]. Names are used verbatim, empty ones included.
    pub fn build(&self, name: Option<&str>) -> Greeting {
        let name = name.unwrap_or(DEFAULT_NAME);
        Greeting {
            id: self.ids.next(),
            content: format!("{} {}", GREETING, name),
            name: name.to_owned(),
        }
    }
}
