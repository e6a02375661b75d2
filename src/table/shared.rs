use std::sync::Arc;

use arc_swap::ArcSwap;
use essentials::info;
use http::Method;

use crate::Result;

use super::{RouteMatch, RouteTable};

/// Route table that can be replaced while requests are being served.
///
/// Readers always see a whole table, either the old or the new one.
pub struct SharedRouteTable<H> {
    current: ArcSwap<RouteTable<H>>,
}

impl<H> SharedRouteTable<H> {
    pub fn new(table: RouteTable<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the active table.
    pub fn load(&self) -> Arc<RouteTable<H>> {
        self.current.load_full()
    }

    /// Atomically replace the active table.
    pub fn store(&self, table: RouteTable<H>) {
        self.current.store(Arc::new(table));
        info!("Route table swapped");
    }

    pub fn match_route(&self, method: &Method, path: &str) -> Result<RouteMatch<H>> {
        self.current.load().match_route(method, path)
    }

    pub fn generate_url<I, K, V>(
        &self,
        name: &str,
        params: I,
        format: Option<&str>,
    ) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.current.load().generate_url(name, params, format)
    }
}

impl<H> From<RouteTable<H>> for SharedRouteTable<H> {
    fn from(table: RouteTable<H>) -> Self {
        Self::new(table)
    }
}
