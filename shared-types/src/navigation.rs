use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A path plus its raw query string (without the leading `?`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        let pathname = pathname.into();
        let search = search.into();
        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname
            },
            search: search.trim_start_matches('?').to_string(),
        }
    }

    pub fn parse(href: &str) -> Self {
        match href.split_once('?') {
            Some((pathname, search)) => Self::new(pathname, search),
            None => Self::new(href, ""),
        }
    }

    pub fn root() -> Self {
        Self::new("/", "")
    }

    /// First value for `key`, decoded. `Some("")` for `?q=`.
    pub fn search_param(&self, key: &str) -> Option<String> {
        url::form_urlencoded::parse(self.search.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn has_search_param(&self, key: &str) -> bool {
        url::form_urlencoded::parse(self.search.as_bytes()).any(|(k, _)| k == key)
    }

    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NavigationState {
    #[default]
    Idle,
    Loading,
    Submitting,
}

/// In-flight transition state, passed down to the views that react to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Navigation {
    pub state: NavigationState,
    pub location: Option<Location>,
}

impl Navigation {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading(location: Location) -> Self {
        Self {
            state: NavigationState::Loading,
            location: Some(location),
        }
    }

    pub fn submitting(location: Location) -> Self {
        Self {
            state: NavigationState::Submitting,
            location: Some(location),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == NavigationState::Idle
    }

    /// True while the pending location carries a `q` parameter.
    pub fn is_searching(&self) -> bool {
        self.location
            .as_ref()
            .is_some_and(|location| location.has_search_param("q"))
    }

    /// True while loading something other than a search.
    pub fn dims_detail(&self) -> bool {
        self.state == NavigationState::Loading && !self.is_searching()
    }
}
