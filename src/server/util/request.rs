//! Request metadata helpers.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use std::{convert::Infallible, net::SocketAddr};

/// Resolves the client IP for audit entries.
///
/// Uses the first `X-Forwarded-For` entry when present, otherwise the peer address.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    forwarded.or_else(|| peer.map(|addr| addr.ip().to_string()))
}

/// Extracts the client IP without failing when no peer address is available.
///
/// The peer address is only present when the server is started with
/// `into_make_service_with_connect_info`; router tests run without it.
pub struct ClientIp(pub Option<String>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(client_ip(&parts.headers, peer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    /// Tests that the first forwarded address wins over the peer address.
    ///
    /// Expected: Some("203.0.113.7")
    #[test]
    fn prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        let peer = "127.0.0.1:5000".parse().ok();

        assert_eq!(client_ip(&headers, peer), Some("203.0.113.7".to_string()));
    }

    /// Tests fallback to the peer address.
    ///
    /// Expected: peer IP without the port
    #[test]
    fn falls_back_to_peer() {
        let peer = "127.0.0.1:5000".parse().ok();
        assert_eq!(
            client_ip(&HeaderMap::new(), peer),
            Some("127.0.0.1".to_string())
        );
        assert_eq!(client_ip(&HeaderMap::new(), None), None);
    }
}
