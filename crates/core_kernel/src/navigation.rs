//! Navigational route table
//!
//! The presentation layer owns rendering; this module owns the mapping from
//! paths to screens and the two redirect rules: the root path lands on the
//! login screen and unknown paths land on the dashboard.

use serde::{Deserialize, Serialize};

/// A navigable screen of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    NewClaim,
    AnalysisResult,
    ClaimHistory,
    ClaimQueue,
    Notifications,
    Profile,
}

impl Route {
    /// All routes, in navigation-menu order
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::Signup,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::NewClaim,
        Route::AnalysisResult,
        Route::ClaimHistory,
        Route::ClaimQueue,
        Route::Notifications,
        Route::Profile,
    ];

    /// Returns the path this route is served under
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
            Route::NewClaim => "/claims/new",
            Route::AnalysisResult => "/claims/analysis-result",
            Route::ClaimHistory => "/claims/history",
            Route::ClaimQueue => "/claims/queue",
            Route::Notifications => "/notifications",
            Route::Profile => "/profile",
        }
    }

    /// Returns true if the route requires an authenticated session
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::Signup | Route::ForgotPassword
        )
    }

    /// Resolves a path to a route
    ///
    /// The root path resolves to the login screen; any unknown path resolves
    /// to the dashboard.
    pub fn resolve(path: &str) -> Route {
        if path == "/" {
            return Route::Login;
        }
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_root_redirects_to_login() {
        assert_eq!(Route::resolve("/"), Route::Login);
    }

    #[test]
    fn test_unknown_path_redirects_to_dashboard() {
        assert_eq!(Route::resolve("/does-not-exist"), Route::Dashboard);
        assert_eq!(Route::resolve("/claims"), Route::Dashboard);
        assert_eq!(Route::resolve(""), Route::Dashboard);
    }

    #[test]
    fn test_auth_routes_are_public() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(!Route::ForgotPassword.requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::NewClaim.requires_auth());
    }
}
