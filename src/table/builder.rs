use std::{collections::HashMap, sync::Arc};

use anyhow::{bail, Context, Result};
use essentials::{debug, info};
use http::Method;

use crate::{Route, RouteSpec, RouteTable};

use super::chunk::{Chunk, CHUNK_SIZE};

/// Options of a [`RouteTableBuilder::group`] scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOptions {
    prefix: String,
    middleware: Vec<String>,
}

impl GroupOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware(mut self, middleware: impl Into<String>) -> Self {
        self.middleware.push(middleware.into());
        self
    }
}

impl From<&str> for GroupOptions {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

impl From<String> for GroupOptions {
    fn from(prefix: String) -> Self {
        Self::new(prefix)
    }
}

/// Stack depths to restore when a scope is left.
struct Scope {
    prefixes: usize,
    middleware: usize,
}

/// Collects routes during startup and freezes them into a [`RouteTable`].
pub struct RouteTableBuilder<H> {
    prefixes: Vec<String>,
    middleware: Vec<String>,
    chunk_size: usize,
    protocol: String,
    static_routes: HashMap<Method, HashMap<Box<str>, Arc<Route<H>>>>,
    dynamic_routes: HashMap<Method, Vec<Vec<Arc<Route<H>>>>>,
    registered: HashMap<Method, HashMap<String, Arc<Route<H>>>>,
    aliases: HashMap<Box<str>, Arc<Route<H>>>,
}

impl<H> Default for RouteTableBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTableBuilder<H> {
    pub fn new() -> Self {
        Self {
            prefixes: Vec::new(),
            middleware: Vec::new(),
            chunk_size: CHUNK_SIZE,
            protocol: "http".to_string(),
            static_routes: HashMap::new(),
            dynamic_routes: HashMap::new(),
            registered: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Set how many dynamic routes are combined into one regex.
    /// The default is [`CHUNK_SIZE`], values below 1 are raised to 1.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the protocol of routes that declare a host but no protocol.
    /// The default protocol is http
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Register a route under the active group prefix and middleware.
    ///
    /// Registering a name twice for the same method returns the first route
    /// and ignores the second registration. A static path that is already
    /// taken by a route with another name is rejected.
    pub fn add_route(
        &mut self,
        method: Method,
        spec: impl Into<RouteSpec>,
        handler: H,
    ) -> Result<Arc<Route<H>>> {
        let mut spec = spec.into();
        spec.path = format!("{}{}", self.prefixes.concat(), spec.path);
        let name = spec.name.take().unwrap_or_else(|| spec.path.clone());
        if let Some(route) = self
            .registered
            .get(&method)
            .and_then(|routes| routes.get(&name))
        {
            debug!(method = %method, name = %name, "Route already registered, ignoring");
            return Ok(route.clone());
        }
        spec.protocol = spec
            .protocol
            .filter(|protocol| !protocol.is_empty())
            .or_else(|| Some(self.protocol.clone()));
        let route = Route::new(method.clone(), name.clone(), spec, handler, &self.middleware)
            .map(Arc::new)
            .with_context(|| format!("Invalid route {} \"{}\"", method, name))?;
        if route.is_static() {
            let routes = self.static_routes.entry(method.clone()).or_default();
            if let Some(existing) = routes.get(route.path()) {
                bail!(
                    "Static path {} \"{}\" is already registered as \"{}\"",
                    method,
                    route.path(),
                    existing.name()
                );
            }
            routes.insert(Box::from(route.path()), route.clone());
        } else {
            let chunks = self.dynamic_routes.entry(method.clone()).or_default();
            match chunks.last_mut() {
                Some(chunk) if chunk.len() < self.chunk_size => chunk.push(route.clone()),
                _ => chunks.push(vec![route.clone()]),
            }
        }
        self.aliases
            .entry(Box::from(name.as_str()))
            .or_insert_with(|| route.clone());
        debug!(method = %method, name = %name, path = route.path(), "Route registered");
        self.registered
            .entry(method)
            .or_default()
            .insert(name, route.clone());
        Ok(route)
    }

    /// Register routes under `options.prefix` with `options.middleware` appended
    /// to the active middleware.
    pub fn group<F>(&mut self, options: impl Into<GroupOptions>, register: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let options = options.into();
        let scope = self.enter(Some(options.prefix), options.middleware);
        let result = register(self);
        self.leave(scope);
        result
    }

    /// Register routes with `middleware` appended to the active middleware.
    pub fn middleware<F>(&mut self, middleware: impl Into<String>, register: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let scope = self.enter(None, vec![middleware.into()]);
        let result = register(self);
        self.leave(scope);
        result
    }

    fn enter(&mut self, prefix: Option<String>, middleware: Vec<String>) -> Scope {
        let scope = Scope {
            prefixes: self.prefixes.len(),
            middleware: self.middleware.len(),
        };
        self.prefixes.extend(prefix);
        self.middleware.extend(middleware);
        scope
    }

    fn leave(&mut self, scope: Scope) {
        self.prefixes.truncate(scope.prefixes);
        self.middleware.truncate(scope.middleware);
    }

    /// Compile the dynamic chunks and freeze the table.
    pub fn build(self) -> Result<RouteTable<H>> {
        let dynamic_chunks = self
            .dynamic_routes
            .into_iter()
            .map(|(method, chunks)| {
                let compiled = chunks
                    .into_iter()
                    .enumerate()
                    .map(|(i, routes)| {
                        Chunk::compile(routes)
                            .with_context(|| format!("Failed to compile chunk {} of {}", i, method))
                    })
                    .collect::<Result<Box<[_]>>>()?;
                Ok::<_, anyhow::Error>((method, compiled))
            })
            .collect::<Result<HashMap<_, _>>>()?;
        let static_routes = self.static_routes.values().map(HashMap::len).sum::<usize>();
        let dynamic_routes = dynamic_chunks
            .values()
            .flat_map(|chunks| chunks.iter().map(Chunk::len))
            .sum::<usize>();
        let chunks = dynamic_chunks.values().map(|chunks| chunks.len()).sum::<usize>();
        info!(static_routes, dynamic_routes, chunks, "Route table built");
        Ok(RouteTable::new(
            self.static_routes,
            dynamic_chunks,
            self.aliases,
        ))
    }
}

macro_rules! verbs {
    ($($fn:ident => $method:ident),* $(,)?) => {
        impl<H> RouteTableBuilder<H> {
            $(
                #[doc = concat!("Register a `", stringify!($method), "` route.")]
                pub fn $fn(
                    &mut self,
                    spec: impl Into<RouteSpec>,
                    handler: H,
                ) -> Result<Arc<Route<H>>> {
                    self.add_route(Method::$method, spec, handler)
                }
            )*
        }
    };
}

verbs!(
    get => GET,
    post => POST,
    put => PUT,
    delete => DELETE,
    head => HEAD,
    options => OPTIONS,
    patch => PATCH,
);
