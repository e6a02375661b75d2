use std::collections::HashMap;

use http::Request;

use crate::{Result, RouteMatch, RouteTable};

/// Attributes a matched route hands over to the request, stored in its extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(HashMap<String, String>);

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(attributes: HashMap<String, String>) -> Self {
        Self(attributes)
    }
}

pub trait RequestAttributes {
    fn attributes(&self) -> Option<&Attributes>;

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().and_then(|attributes| attributes.get(name))
    }
}

impl<B> RequestAttributes for Request<B> {
    fn attributes(&self) -> Option<&Attributes> {
        self.extensions().get::<Attributes>()
    }
}

impl<H> RouteTable<H> {
    /// Match the method and path of `request` and store the route attributes
    /// in its extensions.
    pub fn match_request<B>(&self, request: &mut Request<B>) -> Result<RouteMatch<H>> {
        let matched = self.match_route(request.method(), request.uri().path())?;
        request
            .extensions_mut()
            .insert(Attributes::from(matched.attributes()));
        Ok(matched)
    }
}
