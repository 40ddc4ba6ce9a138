//! Minimal HAL envelope: a resource plus the `_links` a client can follow.
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

pub const HAL_JSON: &str = "application/hal+json";

pub const SELF_REL: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Links in insertion order. A relation may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, Link)>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.0.push((rel.into(), link));
        self
    }

    pub fn first(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| r == rel).map(|(_, l)| l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.0.iter().map(|(r, l)| (r.as_str(), l))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    //relations in first-seen order, each with every link carrying it
    fn grouped(&self) -> Vec<(&str, Vec<&Link>)> {
        let mut groups: Vec<(&str, Vec<&Link>)> = Vec::new();
        for (rel, link) in self.iter() {
            match groups.iter_mut().find(|(r, _)| *r == rel) {
                Some((_, links)) => links.push(link),
                None => groups.push((rel, vec![link])),
            }
        }
        groups
    }
}

// HAL renders a lone link as an object and repeated relations as an array.
impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups = self.grouped();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (rel, links) in groups {
            match links.as_slice() {
                [single] => map.serialize_entry(rel, single)?,
                many => map.serialize_entry(rel, &LinkArray(many))?,
            }
        }
        map.end()
    }
}

struct LinkArray<'a>(&'a [&'a Link]);

impl Serialize for LinkArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for link in self.0 {
            seq.serialize_element(link)?;
        }
        seq.end()
    }
}

/// Domain data with its navigational links attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> HalResource<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }

    pub fn self_link(&self) -> Option<&Link> {
        self.links.first(SELF_REL)
    }
}
