//! Route gating
//!
//! Access to every view depends only on whether an access token is held.

use std::fmt;

/// A client-visible view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, login
    Login,
    /// `/guide`, onboarding guide
    Guide,
    /// `/cards`, today's daily set
    Cards,
    /// `/discoveries`, the vault of past discoveries
    Discoveries,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Guide => "/guide",
            Route::Cards => "/cards",
            Route::Discoveries => "/discoveries",
        }
    }

    /// Parse an exact path; unknown paths yield `None`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Some(Route::Login),
            "/guide" => Some(Route::Guide),
            "/cards" => Some(Route::Cards),
            "/discoveries" => Some(Route::Discoveries),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Auth bootstrap has not completed; render nothing
    Pending,
    /// Show this view
    Render(Route),
    /// Replace the location with this view
    Redirect(Route),
}

/// Resolve `path` given the auth state.
///
/// `has_token` is `None` while the auth session is still bootstrapping.
pub fn resolve_route(path: &str, has_token: Option<bool>) -> RouteDecision {
    let Some(has_token) = has_token else {
        return RouteDecision::Pending;
    };

    match (Route::from_path(path), has_token) {
        (Some(Route::Login), false) => RouteDecision::Render(Route::Login),
        (Some(Route::Login), true) => RouteDecision::Redirect(Route::Cards),
        (Some(route), true) => RouteDecision::Render(route),
        (Some(_), false) | (None, _) => RouteDecision::Redirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out() {
        assert_eq!(resolve_route("/", Some(false)), RouteDecision::Render(Route::Login));
        for path in ["/guide", "/cards", "/discoveries"] {
            assert_eq!(
                resolve_route(path, Some(false)),
                RouteDecision::Redirect(Route::Login),
                "{path}"
            );
        }
    }

    #[test]
    fn test_logged_in() {
        assert_eq!(resolve_route("/", Some(true)), RouteDecision::Redirect(Route::Cards));
        assert_eq!(resolve_route("/cards", Some(true)), RouteDecision::Render(Route::Cards));
        assert_eq!(
            resolve_route("/discoveries/", Some(true)),
            RouteDecision::Render(Route::Discoveries)
        );
        assert_eq!(resolve_route("/guide", Some(true)), RouteDecision::Render(Route::Guide));
    }

    #[test]
    fn test_wildcard_redirects_home() {
        assert_eq!(resolve_route("/nope", Some(true)), RouteDecision::Redirect(Route::Login));
        assert_eq!(resolve_route("/cards/1", Some(false)), RouteDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_pending_until_bootstrapped() {
        assert_eq!(resolve_route("/cards", None), RouteDecision::Pending);
    }

    #[test]
    fn test_query_is_ignored() {
        assert_eq!(Route::from_path("/cards?access_token=abc"), Some(Route::Cards));
        assert_eq!(Route::from_path(""), Some(Route::Login));
    }
}
