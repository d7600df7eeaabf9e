use std::fmt;

/// Fixed path segment every Graph resource lives under.
pub const GRAPH_SEGMENT: &str = "graph";
pub const DEFAULT_API_VERSION: &str = "v1.0";

/// Base service URL plus the API version used to prefix resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base_url: String,
    api_version: String,
}

impl ServiceEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Resolve a relative resource path into a fully qualified endpoint.
    ///
    /// Produces `<base>/graph/<version>/<path>` with exactly one `/` at each
    /// join. Neither side is validated; a malformed base or path is passed
    /// through as-is.
    pub fn resolve(&self, resource_path: &str) -> String {
        format!(
            "{}/{GRAPH_SEGMENT}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            resource_path.trim_start_matches('/')
        )
    }

    pub fn resolve_path(&self, path: &ResourcePath) -> String {
        self.resolve(path.as_str())
    }

    /// Fully resolved URL of a user resource, as used in relationship bodies.
    pub fn user_url(&self, user_id: &str) -> String {
        self.resolve_path(&ResourcePath::new("users").segment(user_id))
    }
}

/// Resolve `resource_path` against `base_url` using the default API version.
pub fn resolve(base_url: &str, resource_path: &str) -> String {
    ServiceEndpoint::new(base_url).resolve(resource_path)
}

/// Relative resource path, composed segment by segment.
///
/// Segments are inserted verbatim (ids are not escaped). An optional trailing
/// suffix is either a query string (starting with `?`, appended directly) or a
/// further path fragment (joined with a single `/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath(String);

impl ResourcePath {
    pub fn new(root: &str) -> Self {
        Self(root.trim_matches('/').to_string())
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.0.push('/');
        self.0.push_str(segment);
        self
    }

    pub fn suffix(mut self, suffix: Option<&str>) -> Self {
        let suffix = suffix.unwrap_or_default().trim_start_matches('/');
        if suffix.is_empty() {
            return self;
        }
        if !suffix.starts_with('?') {
            self.0.push('/');
        }
        self.0.push_str(suffix);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let with = resolve("https://ocis.example.com/", "users");
        let without = resolve("https://ocis.example.com", "users");
        assert_eq!(with, without);
        assert_eq!(with, "https://ocis.example.com/graph/v1.0/users");
    }

    #[test]
    fn repeated_slashes_collapse_to_one() {
        let url = resolve("https://host:9200//", "/users/abc");
        assert_eq!(url, "https://host:9200/graph/v1.0/users/abc");
    }

    #[test]
    fn resolve_is_idempotent_for_same_input() {
        let endpoint = ServiceEndpoint::new("https://host");
        assert_eq!(endpoint.resolve("groups"), endpoint.resolve("groups"));
    }

    #[test]
    fn custom_api_version() {
        let endpoint = ServiceEndpoint::new("https://host/").with_api_version("v1beta1");
        assert_eq!(
            endpoint.resolve("drives"),
            "https://host/graph/v1beta1/drives"
        );
    }

    #[test]
    fn malformed_base_passes_through() {
        assert_eq!(resolve("not a url", "users"), "not a url/graph/v1.0/users");
    }

    #[test]
    fn user_url() {
        let endpoint = ServiceEndpoint::new("https://host");
        assert_eq!(
            endpoint.user_url("u-1"),
            "https://host/graph/v1.0/users/u-1"
        );
    }

    #[test]
    fn path_segments() {
        let path = ResourcePath::new("groups")
            .segment("g1")
            .segment("members")
            .segment("$ref");
        assert_eq!(path.as_str(), "groups/g1/members/$ref");
    }

    #[test]
    fn empty_suffix_adds_nothing() {
        assert_eq!(ResourcePath::new("drives").suffix(None).as_str(), "drives");
        assert_eq!(
            ResourcePath::new("drives").suffix(Some("")).as_str(),
            "drives"
        );
    }

    #[test]
    fn query_suffix_is_appended_directly() {
        let path = ResourcePath::new("me/drives").suffix(Some("?$filter=driveType eq 'project'"));
        assert_eq!(path.as_str(), "me/drives?$filter=driveType eq 'project'");
    }

    #[test]
    fn path_suffix_gets_single_slash() {
        let path = ResourcePath::new("drives").segment("s1").suffix(Some("/root/children"));
        assert_eq!(path.as_str(), "drives/s1/root/children");
        let path = ResourcePath::new("drives").segment("s1").suffix(Some("root"));
        assert_eq!(path.as_str(), "drives/s1/root");
    }
}
