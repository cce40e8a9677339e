//! Public origin of the current request, as seen by the client.

use serde::Deserialize;

/// Request headers that influence the public origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    pub host: String,
    /// `x-forwarded-proto`
    pub forwarded_proto: Option<String>,
    /// `cf-visitor`, a JSON object such as `{"scheme":"https"}`
    pub cf_visitor: Option<String>,
}

#[derive(Deserialize)]
struct CfVisitor {
    scheme: Option<String>,
}

/// Build `scheme://host` for link generation.
///
/// HTTPS is used when Cloudflare reports an https visitor, when the proxy
/// forwarded https, or when the server is configured to always return
/// https links.
pub fn public_origin(headers: &RequestHeaders, return_https_urls: bool) -> String {
    let cf_https = headers
        .cf_visitor
        .as_deref()
        .and_then(|raw| serde_json::from_str::<CfVisitor>(raw).ok())
        .and_then(|visitor| visitor.scheme)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https"));
    let proxy_https = headers
        .forwarded_proto
        .as_deref()
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));

    let scheme = if cf_https || proxy_https || return_https_urls {
        "https"
    } else {
        "http"
    };
    format!("{}://{}", scheme, headers.host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(proto: Option<&str>, cf: Option<&str>) -> RequestHeaders {
        RequestHeaders {
            host: "files.test".to_string(),
            forwarded_proto: proto.map(String::from),
            cf_visitor: cf.map(String::from),
        }
    }

    #[test]
    fn test_plain_http() {
        assert_eq!(public_origin(&headers(None, None), false), "http://files.test");
    }

    #[test]
    fn test_https_sources() {
        assert_eq!(
            public_origin(&headers(Some("https"), None), false),
            "https://files.test"
        );
        assert_eq!(
            public_origin(&headers(None, Some(r#"{"scheme":"https"}"#)), false),
            "https://files.test"
        );
        assert_eq!(public_origin(&headers(None, None), true), "https://files.test");
    }

    #[test]
    fn test_malformed_cf_visitor_falls_back_to_proxy_header() {
        assert_eq!(
            public_origin(&headers(Some("https"), Some("not json")), false),
            "https://files.test"
        );
        assert_eq!(
            public_origin(&headers(Some("http"), Some(r#"{"scheme":"http"}"#)), false),
            "http://files.test"
        );
    }
}
