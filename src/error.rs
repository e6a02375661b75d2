use std::fmt::Display;

use http::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No route matches the requested path, or no route carries the requested name.
    RouteNotFound(String),
    /// The url for a route could not be generated from the supplied parameters.
    Generation {
        route: String,
        variables: Vec<String>,
    },
}

impl Error {
    pub fn not_found<S: AsRef<str>>(target: S) -> Self {
        Self::RouteNotFound(target.as_ref().to_string())
    }

    pub fn generation<S: AsRef<str>>(route: S, variables: Vec<String>) -> Self {
        Self::Generation {
            route: route.as_ref().to_string(),
            variables,
        }
    }

    /// Status code a http layer should answer with when this error reaches it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RouteNotFound(target) => write!(f, "Route \"{}\" is not found", target),
            Self::Generation { route, variables } => write!(
                f,
                "Route \"{}\" generator fail, set route parameters [\"{}\"]",
                route,
                variables.join("\", \"")
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::not_found("/nowhere").to_string(),
            "Route \"/nowhere\" is not found"
        );
        assert_eq!(
            Error::generation("users.show", vec!["id".to_string(), "slug".to_string()])
                .to_string(),
            "Route \"users.show\" generator fail, set route parameters [\"id\", \"slug\"]"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::generation("x", vec![]).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
