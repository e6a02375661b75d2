//! Route table library mapping requests to registered routes and routes back to urls.
//!
//! Static routes are looked up by exact path. Dynamic routes (paths with
//! `{variables}`) are combined into regexes of at most [`CHUNK_SIZE`] routes,
//! so a single regex run tests many routes at once.
//!
//! # Path syntax
//!
//! - `{id}` matches one path segment
//! - `{id:\d+}` matches the inline pattern
//! - `[/{page}]` at the end of a path marks an optional segment, optional
//!   segments can be nested: `/archive/{year}[/{month}[/{day}]]`
//!
//! # Example usage
//!
//! ```
//! use http::Method;
//! use route_table::{GroupOptions, RouteSpec, RouteTable};
//!
//! let mut builder = RouteTable::builder();
//! builder
//!     .group(GroupOptions::new("/users").with_middleware("auth"), |users| {
//!         users.get("", "users.index")?;
//!         users.get(
//!             RouteSpec::new("/{id:\\d+}").with_name("users.show"),
//!             "users.show",
//!         )?;
//!         Ok(())
//!     })
//!     .unwrap();
//! let table = builder.build().unwrap();
//!
//! let matched = table.match_route(&Method::GET, "/users/42").unwrap();
//! assert_eq!(*matched.route.handler(), "users.show");
//! assert_eq!(matched.bindings.get("id").map(String::as_str), Some("42"));
//! assert_eq!(&*matched.route.middleware()[0], "auth");
//!
//! let url = table
//!     .generate_url("users.show", [("id", "42"), ("sort", "asc")], None)
//!     .unwrap();
//! assert_eq!(url, "/users/42?sort=asc");
//! ```
pub(crate) mod error;
pub mod http;
pub(crate) mod route;
pub(crate) mod table;

pub use error::{Error, Result};
pub use route::{Bindings, Route, RouteSpec};
pub use table::{GroupOptions, RouteMatch, RouteTable, RouteTableBuilder, CHUNK_SIZE, NO_PARAMS};

#[cfg(feature = "shared")]
pub use table::SharedRouteTable;
