// src/shell/route.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unrecognized route: {0}")]
pub struct RouteParseError(String);

/// Client-side route surface.
///
/// `/` list (optional tag filter carried as a query), `/create`,
/// `/notes/{id}` detail, `/notes/{id}/edit` edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List { tags: Vec<String> },
    Create,
    Detail(i64),
    Edit(i64),
}

impl Route {
    /// The unfiltered list route.
    pub fn list() -> Self {
        Route::List { tags: Vec::new() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List { tags } if tags.is_empty() => write!(f, "/"),
            Route::List { tags } => write!(f, "/?tags={}", tags.join(",")),
            Route::Create => write!(f, "/create"),
            Route::Detail(id) => write!(f, "/notes/{id}"),
            Route::Edit(id) => write!(f, "/notes/{id}/edit"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        match path {
            "" | "/" => {
                let tags = query
                    .and_then(|q| q.strip_prefix("tags="))
                    .map(|value| {
                        value
                            .split(',')
                            .filter(|s| !s.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(Route::List { tags })
            }
            "/create" => Ok(Route::Create),
            _ => {
                let rest = path
                    .strip_prefix("/notes/")
                    .ok_or_else(|| RouteParseError(raw.to_string()))?;
                if let Some(id) = rest.strip_suffix("/edit") {
                    id.parse()
                        .map(Route::Edit)
                        .map_err(|_| RouteParseError(raw.to_string()))
                } else {
                    rest.parse()
                        .map(Route::Detail)
                        .map_err(|_| RouteParseError(raw.to_string()))
                }
            }
        }
    }
}
