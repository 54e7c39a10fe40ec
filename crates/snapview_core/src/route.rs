//! Pure location <-> route decoding.
//!
//! The location string is the only channel carrying state between views, so a
//! preview route must decode back to the same target it was encoded from.

use url::{form_urlencoded, Url};

use crate::TargetUrl;

pub const ENTRY_PATH: &str = "/";
pub const PREVIEW_PATH: &str = "/preview";
pub const URL_PARAM: &str = "url";

/// Resolution base for relative locations; never shown to the user.
const LOCATION_BASE: &str = "http://snapview.invalid/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Entry,
    Preview { target: Option<TargetUrl> },
    NotFound { path: String },
}

impl Route {
    pub fn preview(target: TargetUrl) -> Self {
        Route::Preview {
            target: Some(target),
        }
    }

    /// Decodes a location (`/path?query`) into a route.
    pub fn parse(location: &str) -> Self {
        let Some(url) = resolve(location) else {
            return Route::NotFound {
                path: location.to_string(),
            };
        };

        match url.path() {
            ENTRY_PATH => Route::Entry,
            path if path.trim_end_matches('/') == PREVIEW_PATH => {
                let target = url
                    .query_pairs()
                    .find(|(key, _)| key == URL_PARAM)
                    .and_then(|(_, value)| TargetUrl::parse(&value));
                Route::Preview { target }
            }
            other => Route::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// Encodes the route as a location string.
    pub fn to_location(&self) -> String {
        match self {
            Route::Entry => ENTRY_PATH.to_string(),
            Route::Preview { target: None } => PREVIEW_PATH.to_string(),
            Route::Preview {
                target: Some(target),
            } => {
                let encoded: String =
                    form_urlencoded::byte_serialize(target.as_str().as_bytes()).collect();
                format!("{PREVIEW_PATH}?{URL_PARAM}={encoded}")
            }
            Route::NotFound { path } => path.clone(),
        }
    }
}

fn resolve(location: &str) -> Option<Url> {
    Url::parse(LOCATION_BASE).ok()?.join(location).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty_decode_to_entry() {
        assert_eq!(Route::parse("/"), Route::Entry);
        assert_eq!(Route::parse(""), Route::Entry);
    }

    #[test]
    fn preview_without_param_has_no_target() {
        assert_eq!(Route::parse("/preview"), Route::Preview { target: None });
        assert_eq!(
            Route::parse("/preview?url="),
            Route::Preview { target: None }
        );
        assert_eq!(
            Route::parse("/preview?other=1"),
            Route::Preview { target: None }
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound {
                path: "/settings".to_string()
            }
        );
    }

    #[test]
    fn not_found_keeps_requested_path() {
        let route = Route::parse("/settings/");
        assert_eq!(
            route,
            Route::NotFound {
                path: "/settings/".to_string()
            }
        );
        assert_eq!(route.to_location(), "/settings/");
        assert_eq!(Route::parse("/preview/"), Route::Preview { target: None });
    }

    #[test]
    fn encoded_target_escapes_reserved_characters() {
        let target = TargetUrl::parse("https://a.com/x?y=1&z=2").unwrap();
        let location = Route::preview(target).to_location();
        assert_eq!(
            location,
            "/preview?url=https%3A%2F%2Fa.com%2Fx%3Fy%3D1%26z%3D2"
        );
    }
}
