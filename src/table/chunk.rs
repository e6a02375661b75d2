use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;

use crate::Route;

/// Patterns combined into one regex per chunk.
pub const CHUNK_SIZE: usize = 10;

/// Up to `CHUNK_SIZE` dynamic routes tested by a single regex.
///
/// Every alternative of the combined regex ends with an empty marker group,
/// `^(?:/users/([^/]+)()|/posts/([^/]+)/([^/]+)())$`. The index of the marker
/// group that took part in a match is the discriminator of the route.
#[derive(Debug)]
pub(crate) struct Chunk<H> {
    regex: Regex,
    routes: Box<[(usize, Arc<Route<H>>)]>,
}

impl<H> Chunk<H> {
    pub fn compile(routes: Vec<Arc<Route<H>>>) -> Result<Self> {
        let mut groups = 0;
        let mut alternatives = Vec::with_capacity(routes.len());
        let routes = routes
            .into_iter()
            .map(|route| {
                groups += route.variables().len() + 1;
                alternatives.push(format!("{}()", route.pattern()));
                (groups, route)
            })
            .collect::<Box<[_]>>();
        let pattern = format!("^(?:{})$", alternatives.join("|"));
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to compile combined pattern \"{}\"", pattern))?;
        Ok(Self { regex, routes })
    }

    /// First route of the chunk, in registration order, whose pattern matches `path`.
    pub fn find(&self, path: &str) -> Option<&Arc<Route<H>>> {
        let captures = self.regex.captures(path)?;
        self.routes
            .iter()
            .find(|(marker, _)| captures.get(*marker).is_some())
            .map(|(_, route)| route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}
