//! Per-client rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Rate limiter keyed on the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// Panics if `burst` is zero; [`crate::config::Config::validate`]
/// rejects it at startup.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api::routes::query_routes())
///     .layer(rate_limit::layer(10, 50));
/// ```
pub fn layer(
    requests_per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(replenish_interval_ns(requests_per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit values are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter keyed on `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address.
///
/// Only use behind a trusted reverse proxy: clients can set these headers.
///
/// # Panics
///
/// Same conditions as [`layer`].
pub fn proxy_layer(
    requests_per_second: u64,
    burst: u32,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_nanosecond(replenish_interval_ns(requests_per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit values are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Nanoseconds between two replenished tokens.
fn replenish_interval_ns(requests_per_second: u64) -> u64 {
    (NANOS_PER_SECOND / requests_per_second.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replenish_interval() {
        assert_eq!(replenish_interval_ns(1), 1_000_000_000);
        assert_eq!(replenish_interval_ns(10), 100_000_000);
        assert_eq!(replenish_interval_ns(0), 1_000_000_000);
    }

    #[test]
    fn test_replenish_interval_keeps_high_rates() {
        assert_eq!(replenish_interval_ns(1000), 1_000_000);
        assert_eq!(replenish_interval_ns(5000), 200_000);
        assert_eq!(replenish_interval_ns(10_000), 100_000);
    }

    #[test]
    fn test_replenish_interval_uneven_rate() {
        let interval = replenish_interval_ns(3);
        assert_eq!(interval, 333_333_333);
        assert!(3 * interval <= NANOS_PER_SECOND);
        assert!(NANOS_PER_SECOND - 3 * interval < 3);
    }
}
