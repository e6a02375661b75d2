use std::collections::BTreeMap;

use essentials::warn;
use url::form_urlencoded;

use crate::{Error, Result};

use super::RouteTable;

/// Empty parameter list for [`RouteTable::generate_url`].
pub const NO_PARAMS: [(&str, &str); 0] = [];

impl<H> RouteTable<H> {
    /// Build the url of the route registered under `name`.
    ///
    /// Parameters that are not variables of the route end up in the query
    /// string. The generated path is matched against the route before it is
    /// returned, so it always resolves back to the same route.
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
        let route = self.get_route(name).ok_or_else(|| Error::not_found(name))?;
        let suffix = format
            .filter(|format| !format.is_empty())
            .map(|format| format!(".{}", format))
            .unwrap_or_default();
        let host = route
            .host()
            .map(|host| format!("{}://{}", route.protocol(), host))
            .unwrap_or_default();
        if route.is_static() {
            return Ok(format!("{}{}{}", host, route.path(), suffix));
        }

        let mut values = route
            .defaults()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        values.extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        let (variables, query): (BTreeMap<_, _>, BTreeMap<_, _>) = values
            .into_iter()
            .partition(|(key, _)| route.has_variable(key));

        let path = route.template().render(&variables).map_err(|missing| {
            warn!(route = name, missing = ?missing, "Missing route parameters");
            Error::generation(name, missing)
        })?;
        if !route.regex().is_match(&path) {
            warn!(route = name, path = %path, "Generated path does not match its route");
            return Err(Error::generation(
                name,
                route.variables().iter().map(|v| v.to_string()).collect(),
            ));
        }

        let mut url = format!("{}{}{}", host, path, suffix);
        if !query.is_empty() {
            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&query)
                    .finish(),
            );
        }
        Ok(url)
    }
}
