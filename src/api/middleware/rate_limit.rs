//! Per-IP rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for page views.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let pages = Router::new()
///     .route("/news", get(news_page_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> IpGovernorLayer {
    build(2, 100)
}

/// Creates a stricter rate limiter for form posts and the JSON API.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// # Example
///
/// ```rust,ignore
/// let forms = Router::new()
///     .route("/contact", post(contact_submit_handler))
///     .layer(rate_limit::secure_layer());
/// ```
pub fn secure_layer() -> IpGovernorLayer {
    build(1, 10)
}

fn build(per_second: u64, burst_size: u32) -> IpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("non-zero rate limit parameters"),
    );

    GovernorLayer::new(governor_conf)
}
