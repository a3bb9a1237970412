//! Route metadata model types.

use std::fmt;
use std::str::FromStr;

/// HTTP method component of a route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    /// GET
    Get,
    /// HEAD
    Head,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// CONNECT
    Connect,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
}

impl RouteMethod {
    /// The method token as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method token is not one of the nine supported
/// methods.
#[derive(Debug, thiserror::Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for RouteMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "CONNECT" => Ok(Self::Connect),
            "OPTIONS" => Ok(Self::Options),
            "TRACE" => Ok(Self::Trace),
            other => Err(UnknownMethod(other.to_owned())),
        }
    }
}

impl TryFrom<&http::Method> for RouteMethod {
    type Error = UnknownMethod;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

/// Lookup key for a route: the URL it is registered under plus the HTTP
/// method it answers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteKey {
    /// URL the route is registered under.
    pub url: String,
    /// HTTP method the route answers to.
    pub method: RouteMethod,
}

impl RouteKey {
    /// Create a key from a URL and method.
    pub fn new(url: impl Into<String>, method: RouteMethod) -> Self {
        Self {
            url: url.into(),
            method,
        }
    }
}

/// Metadata registered for a route.
///
/// A public route is reachable without authorization, and a user-specific
/// route carries no RBAC resource/verb; in both cases the remaining fields
/// are not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Endpoint the route dispatches to.
    pub endpoint: String,

    /// Whether the route is publicly accessible.
    #[serde(default)]
    pub is_public: bool,

    /// Whether the route is restricted to the root tenancy.
    #[serde(default)]
    pub is_root: bool,

    /// Whether the route is user-specific rather than RBAC-governed.
    #[serde(default)]
    pub is_user_specific: bool,

    /// RBAC resource associated with the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// RBAC verb associated with the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_method_token() {
        assert_eq!(RouteMethod::Get.to_string(), "GET");
        assert_eq!(RouteMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_should_parse_method_token() {
        assert_eq!("POST".parse::<RouteMethod>().unwrap(), RouteMethod::Post);
        assert_eq!("TRACE".parse::<RouteMethod>().unwrap(), RouteMethod::Trace);
    }

    #[test]
    fn test_should_reject_unknown_method_token() {
        let result = "BREW".parse::<RouteMethod>();
        assert!(matches!(result, Err(UnknownMethod(m)) if m == "BREW"));
    }

    #[test]
    fn test_should_reject_lowercase_method_token() {
        // Method tokens are case-sensitive on the wire.
        assert!("get".parse::<RouteMethod>().is_err());
    }

    #[test]
    fn test_should_convert_from_http_method() {
        let method = RouteMethod::try_from(&http::Method::PUT).unwrap();
        assert_eq!(method, RouteMethod::Put);
    }

    #[test]
    fn test_should_reject_http_extension_method() {
        let brew = http::Method::from_bytes(b"BREW").expect("extension method");
        assert!(RouteMethod::try_from(&brew).is_err());
    }

    #[test]
    fn test_should_serialize_method_as_token() {
        let json = serde_json::to_string(&RouteMethod::Options).expect("serialize");
        assert_eq!(json, r#""OPTIONS""#);
    }

    #[test]
    fn test_should_round_trip_route_through_serde() {
        let route = Route {
            endpoint: "https://widgets.internal".to_owned(),
            is_root: true,
            resource: Some("widgets".to_owned()),
            verb: Some("create".to_owned()),
            ..Route::default()
        };

        let json = serde_json::to_string(&route).expect("serialize");
        assert!(json.contains(r#""isRoot":true"#));
        assert!(json.contains(r#""isPublic":false"#));

        let back: Route = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, route);
    }

    #[test]
    fn test_should_skip_absent_rbac_fields() {
        let route = Route {
            endpoint: "https://widgets.internal".to_owned(),
            is_public: true,
            ..Route::default()
        };

        let json = serde_json::to_string(&route).expect("serialize");
        assert!(!json.contains("resource"));
        assert!(!json.contains("verb"));
    }

    #[test]
    fn test_should_default_missing_flags_on_deserialize() {
        let route: Route =
            serde_json::from_str(r#"{"endpoint":"https://widgets.internal"}"#).expect("deserialize");
        assert!(!route.is_public);
        assert!(!route.is_root);
        assert!(!route.is_user_specific);
        assert_eq!(route.resource, None);
    }
}
