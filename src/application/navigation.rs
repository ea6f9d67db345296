//! Logical routes of the application and their resolution against the store.
//!
//! An id that does not resolve to a stored analysis redirects to the
//! dashboard; it is a recoverable routing inconsistency, not a user error.

use std::fmt;

use tracing::debug;

use super::AnalysisStore;
use crate::domain::foundation::AnalysisId;

/// A navigable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - list of analyses.
    Dashboard,
    /// `/analysis/:id` - focus on a single analysis.
    Analysis(AnalysisId),
    /// `/global` - aggregated view.
    Global,
    /// `/solutions` - static context.
    Solutions,
    /// `/compare/:originalId/:whatIfId` - what-if comparison.
    Compare {
        original_id: AnalysisId,
        what_if_id: AnalysisId,
    },
    /// Anything else.
    NotFound,
}

impl Route {
    /// Parses a path. Malformed ids behave like unknown ids and redirect on
    /// resolution; unknown shapes are `NotFound`.
    pub fn parse(path: &str) -> ParsedRoute {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => ParsedRoute::Valid(Route::Dashboard),
            ["global"] => ParsedRoute::Valid(Route::Global),
            ["solutions"] => ParsedRoute::Valid(Route::Solutions),
            ["analysis", id] => match id.parse() {
                Ok(id) => ParsedRoute::Valid(Route::Analysis(id)),
                Err(_) => ParsedRoute::UnresolvableId,
            },
            ["compare", original, what_if] => match (original.parse(), what_if.parse()) {
                (Ok(original_id), Ok(what_if_id)) => ParsedRoute::Valid(Route::Compare {
                    original_id,
                    what_if_id,
                }),
                _ => ParsedRoute::UnresolvableId,
            },
            _ => ParsedRoute::Valid(Route::NotFound),
        }
    }

    /// Returns the route to actually display, redirecting unknown ids.
    pub fn resolve(self, store: &AnalysisStore) -> Route {
        let resolvable = match self {
            Route::Analysis(id) => store.contains(id),
            Route::Compare {
                original_id,
                what_if_id,
            } => store.contains(original_id) && store.contains(what_if_id),
            _ => true,
        };
        if resolvable {
            self
        } else {
            debug!(route = %self, "Unresolvable route, redirecting to dashboard");
            Route::Dashboard
        }
    }

    /// Parses and resolves in one step.
    pub fn navigate(path: &str, store: &AnalysisStore) -> Route {
        match Route::parse(path) {
            ParsedRoute::Valid(route) => route.resolve(store),
            ParsedRoute::UnresolvableId => {
                debug!(path, "Malformed id in route, redirecting to dashboard");
                Route::Dashboard
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/"),
            Route::Analysis(id) => write!(f, "/analysis/{}", id),
            Route::Global => write!(f, "/global"),
            Route::Solutions => write!(f, "/solutions"),
            Route::Compare {
                original_id,
                what_if_id,
            } => write!(f, "/compare/{}/{}", original_id, what_if_id),
            Route::NotFound => write!(f, "/404"),
        }
    }
}

/// Outcome of parsing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedRoute {
    Valid(Route),
    /// Right shape, but an id segment is not a valid identifier.
    UnresolvableId,
}
