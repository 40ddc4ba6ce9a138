use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{Greeting, GreetingError};
use crate::hal::{HalResource, Link, Links, SELF_REL};

// everything but RFC 3986 unreserved characters gets escaped in the query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Wraps greetings into HAL resources whose links point back at both greeting routes.
#[derive(Debug, Clone)]
pub struct GreetingAssembler {
    base_url: String,
}

impl GreetingAssembler {
    /// `base_url` is scheme + authority, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Both links carry the `self` relation. Existing clients read the first
    /// one as the canonical location, so the duplicate relation is kept.
    pub fn to_model(&self, greeting: Greeting) -> HalResource<Greeting> {
        let links = Links::new()
            .with(SELF_REL, Link::new(self.named_greeting_url(&greeting.name)))
            .with(SELF_REL, Link::new(self.default_greeting_url()));
        HalResource::new(greeting, links)
    }

    /// Assembles a greeting known only by its id and formatted content, such as
    /// `HELLO ALICE`. The name for the links is everything after the first space.
    pub fn assemble(
        &self,
        id: i64,
        content: String,
    ) -> Result<HalResource<Greeting>, GreetingError> {
        Greeting::parse(id, content).map(|greeting| self.to_model(greeting))
    }

    pub fn named_greeting_url(&self, name: &str) -> String {
        format!(
            "{}/?name={}",
            self.base_url,
            utf8_percent_encode(name, QUERY_VALUE)
        )
    }

    pub fn default_greeting_url(&self) -> String {
        format!("{}/v1", self.base_url)
    }
}
