use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::parts::id::PartId;

/// Short identifier of an external content page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentSlug(String);

impl ContentSlug {
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route of the content page for this slug.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/chit/{}", self.0)
    }
}

impl fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static part → content-slug table. A hit bypasses animation entirely.
#[derive(Debug, Default, Clone)]
pub struct ChitLinkResolver {
    links: FxHashMap<PartId, ContentSlug>,
}

impl ChitLinkResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, part: PartId, slug: ContentSlug) {
        self.links.insert(part, slug);
    }

    #[must_use]
    pub fn resolve(&self, part: PartId) -> Option<&ContentSlug> {
        self.links.get(&part)
    }

    #[must_use]
    pub fn contains(&self, part: PartId) -> bool {
        self.links.contains_key(&part)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<(PartId, ContentSlug)> for ChitLinkResolver {
    fn from_iter<I: IntoIterator<Item = (PartId, ContentSlug)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}
