use std::collections::HashMap;

use anyhow::{Context, Result};
use http::Method;
use regex::Regex;

pub use spec::RouteSpec;
pub use template::Template;

mod spec;
mod template;

/// Values captured for the variables of a route by one match.
pub type Bindings = HashMap<String, String>;

/// One registered endpoint. Immutable once created.
#[derive(Debug)]
pub struct Route<H> {
    method: Method,
    name: Box<str>,
    path: Box<str>,
    template: Template,
    pattern: Box<str>,
    regex: Regex,
    variables: Box<[Box<str>]>,
    defaults: HashMap<String, String>,
    host: Option<Box<str>>,
    protocol: Box<str>,
    middleware: Box<[Box<str>]>,
    handler: H,
}

impl<H> Route<H> {
    /// `spec.path` is expected to carry the group prefix already.
    pub(crate) fn new(
        method: Method,
        name: String,
        spec: RouteSpec,
        handler: H,
        middleware: &[String],
    ) -> Result<Self> {
        let template = Template::parse(&spec.path)?;
        let pattern = template.pattern();
        let regex = Regex::new(&format!("^{}$", pattern))
            .with_context(|| format!("Failed to compile pattern \"{}\"", pattern))?;
        let variables = template.variables().map(Box::from).collect();
        Ok(Self {
            method,
            name: name.into_boxed_str(),
            path: spec.path.into_boxed_str(),
            template,
            pattern: pattern.into_boxed_str(),
            regex,
            variables,
            defaults: spec.defaults,
            host: spec
                .host
                .filter(|host| !host.is_empty())
                .map(String::into_boxed_str),
            protocol: spec
                .protocol
                .filter(|protocol| !protocol.is_empty())
                .unwrap_or_else(|| "http".to_string())
                .into_boxed_str(),
            middleware: middleware.iter().map(|m| Box::from(m.as_str())).collect(),
            handler,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path template including the group prefix, e.g. `/users/{id}`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Anchored regex with one capture group per variable.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn variables(&self) -> &[Box<str>] {
        &self.variables
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|variable| &**variable == name)
    }

    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Middleware of every scope the route was registered in, outermost first.
    pub fn middleware(&self) -> &[Box<str>] {
        &self.middleware
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn is_static(&self) -> bool {
        self.variables.is_empty()
    }

    pub(crate) fn template(&self) -> &Template {
        &self.template
    }

    /// Unanchored form of [`Route::regex`], used to combine routes into one regex.
    pub(crate) fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches `path` against this route alone.
    /// Variables that captured nothing are left out of the bindings.
    pub(crate) fn bind(&self, path: &str) -> Option<Bindings> {
        let captures = self.regex.captures(path)?;
        Some(
            self.variables
                .iter()
                .zip(captures.iter().skip(1))
                .filter_map(|(name, value)| {
                    value
                        .map(|value| value.as_str())
                        .filter(|value| !value.is_empty())
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect(),
        )
    }
}
