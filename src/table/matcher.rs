use std::{collections::HashMap, sync::Arc};

use essentials::debug;
use http::Method;

use crate::{Bindings, Error, Result, Route};

use super::RouteTable;

/// Outcome of a successful match. Owned by the caller, the route is left untouched.
#[derive(Debug)]
pub struct RouteMatch<H> {
    pub route: Arc<Route<H>>,
    pub bindings: Bindings,
}

impl<H> RouteMatch<H> {
    /// Defaults of the route overlaid with the bound variables.
    pub fn attributes(&self) -> HashMap<String, String> {
        let mut attributes = self.route.defaults().clone();
        attributes.extend(self.bindings.clone());
        attributes
    }
}

impl<H> RouteTable<H> {
    /// Find the route for `path`.
    ///
    /// Static routes are tried first, also with the trailing slash toggled,
    /// then the dynamic routes of `method` in registration order.
    pub fn match_route(&self, method: &Method, path: &str) -> Result<RouteMatch<H>> {
        if let Some(route) = self.find_static(method, path) {
            return Ok(RouteMatch {
                route: route.clone(),
                bindings: Bindings::new(),
            });
        }
        self.find_dynamic(method, path)
            .ok_or_else(|| {
                debug!(method = %method, path = path, "No route matched");
                Error::not_found(path)
            })
    }

    /// Same as [`RouteTable::match_route`] for a method given as text.
    pub fn match_str(&self, method: &str, path: &str) -> Result<RouteMatch<H>> {
        let method = Method::from_bytes(method.as_bytes()).map_err(|_| Error::not_found(path))?;
        self.match_route(&method, path)
    }

    fn find_static(&self, method: &Method, path: &str) -> Option<&Arc<Route<H>>> {
        let routes = self.static_routes.get(method)?;
        // Only one slash is toggled, `/users//` does not resolve to `/users`.
        routes.get(path).or_else(|| match path.strip_suffix('/') {
            Some(trimmed) => routes.get(trimmed),
            None => routes.get(format!("{}/", path).as_str()),
        })
    }

    fn find_dynamic(&self, method: &Method, path: &str) -> Option<RouteMatch<H>> {
        self.dynamic_chunks
            .get(method)?
            .iter()
            .find_map(|chunk| chunk.find(path))
            .and_then(|route| {
                route.bind(path).map(|bindings| RouteMatch {
                    route: route.clone(),
                    bindings,
                })
            })
    }
}
