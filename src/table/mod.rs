use std::{collections::HashMap, sync::Arc};

use http::Method;

use crate::Route;

pub use builder::{GroupOptions, RouteTableBuilder};
pub use chunk::CHUNK_SIZE;
pub use generator::NO_PARAMS;
pub use matcher::RouteMatch;
#[cfg(feature = "shared")]
pub use shared::SharedRouteTable;

use chunk::Chunk;

mod builder;
mod chunk;
mod generator;
mod matcher;
#[cfg(feature = "shared")]
mod shared;

/// Finalized, read-only routes produced by [`RouteTableBuilder::build`].
///
/// Matching and url generation only borrow the table, so one table can serve
/// any number of threads at once.
#[derive(Debug)]
pub struct RouteTable<H> {
    static_routes: HashMap<Method, HashMap<Box<str>, Arc<Route<H>>>>,
    dynamic_chunks: HashMap<Method, Box<[Chunk<H>]>>,
    aliases: HashMap<Box<str>, Arc<Route<H>>>,
}

impl<H> RouteTable<H> {
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder::new()
    }

    pub(crate) fn new(
        static_routes: HashMap<Method, HashMap<Box<str>, Arc<Route<H>>>>,
        dynamic_chunks: HashMap<Method, Box<[Chunk<H>]>>,
        aliases: HashMap<Box<str>, Arc<Route<H>>>,
    ) -> Self {
        Self {
            static_routes,
            dynamic_chunks,
            aliases,
        }
    }

    /// Route registered under `name`, without matching any path.
    pub fn get_route(&self, name: &str) -> Option<&Arc<Route<H>>> {
        self.aliases.get(name)
    }
}
