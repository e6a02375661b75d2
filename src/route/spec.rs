use std::collections::HashMap;

/// What gets registered: a path plus the optional metadata of a route.
///
/// A bare `&str` or `String` converts into a spec whose name is the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSpec {
    pub(crate) path: String,
    pub(crate) name: Option<String>,
    pub(crate) defaults: HashMap<String, String>,
    pub(crate) host: Option<String>,
    pub(crate) protocol: Option<String>,
}

impl RouteSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Name used for url generation instead of the prefixed path.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    pub fn with_defaults<I, K, V>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.defaults
            .extend(defaults.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Host prepended to generated urls.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Protocol used together with the host.
    /// Defaults to the one configured on the builder.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

impl From<&str> for RouteSpec {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RouteSpec {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
