use crate::error::HostError;
use crate::result::HostResult;
use std::collections::HashMap;

/// URL generation abstraction; the host router provides the real one.
pub trait UrlBuilder {
    /// Build a URL for a named route. `params` are route parameters in the
    /// order given; `query` is appended as a query string verbatim.
    fn url(
        &self,
        route: &str,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> HostResult<String>;
}

/// Path-style builder: route `a.b` becomes `/a/b`, route parameter values
/// are appended as path segments, the query string is rendered as given.
/// Good enough for tests and demos; a real host replaces it.
pub struct PathUrlBuilder;

impl UrlBuilder for PathUrlBuilder {
    fn url(
        &self,
        route: &str,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> HostResult<String> {
        let mut url = String::from("/");
        url.push_str(&route.replace('.', "/"));

        for (_, value) in params {
            url.push('/');
            url.push_str(value);
        }

        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        Ok(url)
    }
}

/// Mock builder for testing: preset route → URL map, ignores parameters.
pub struct MockUrlBuilder {
    pub routes: HashMap<String, String>,
}

impl MockUrlBuilder {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn add_route(&mut self, route: impl Into<String>, url: impl Into<String>) {
        self.routes.insert(route.into(), url.into());
    }
}

impl Default for MockUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlBuilder for MockUrlBuilder {
    fn url(
        &self,
        route: &str,
        _params: &[(&str, &str)],
        _query: &[(&str, &str)],
    ) -> HostResult<String> {
        self.routes
            .get(route)
            .cloned()
            .ok_or_else(|| HostError::UnknownRoute(route.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder_route_and_params() {
        let urls = PathUrlBuilder;
        let url = urls
            .url("group.subscribe", &[("group", "7"), ("membership_type", "default")], &[])
            .expect("Failed to build URL");
        assert_eq!(url, "/group/subscribe/7/default");
    }

    #[test]
    fn test_path_builder_query() {
        let urls = PathUrlBuilder;
        let url = urls
            .url("user.login", &[], &[("destination", "/group/canonical/7")])
            .expect("Failed to build URL");
        assert_eq!(url, "/user/login?destination=/group/canonical/7");
    }

    #[test]
    fn test_mock_builder_unknown_route() {
        let urls = MockUrlBuilder::new();
        let err = urls.url("user.login", &[], &[]).unwrap_err();
        assert!(matches!(err, HostError::UnknownRoute(_)));
    }
}
