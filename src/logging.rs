use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Correlation header. Echoed from the request when usable, minted otherwise.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_REQUEST_ID_LEN: usize = 128;

/// How a finished request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// 401 or 403 from the authorization pipeline.
    Denied,
    ClientError,
    ServerError,
}

impl Outcome {
    pub fn classify(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Outcome::Denied,
            s if s.is_server_error() => Outcome::ServerError,
            s if s.is_client_error() => Outcome::ClientError,
            _ => Outcome::Completed,
        }
    }
}

fn request_id(req: &Request) -> String {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Wraps each request in a span carrying its id, logs one line per outcome,
/// and returns the id in `x-request-id`. Token values are never logged, only
/// whether an `Authorization` header was sent.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request_id(&req);
    let has_credential = req.headers().contains_key(header::AUTHORIZATION);
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        debug!(has_credential, "Incoming request");

        let mut response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        match Outcome::classify(response.status()) {
            Outcome::Completed => info!(status, latency_ms, "Request completed"),
            Outcome::Denied => warn!(status, latency_ms, has_credential, "Request denied"),
            Outcome::ClientError => warn!(status, latency_ms, "Client error"),
            Outcome::ServerError => error!(status, latency_ms, "Server error"),
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
        }
        response
    }
    .instrument(span)
    .await
}

/// Output format for console logs, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_filter(log_level: &str) -> String {
    format!(
        "{}={},tower_http=warn,hyper=warn,axum::rejection=trace",
        env!("CARGO_CRATE_NAME"),
        log_level
    )
}

/// Installs the global tracing subscriber.
///
/// - **Log Level**: `RUST_LOG` if set, otherwise `LOG_LEVEL` (default "info")
///   for this crate with noisy dependencies held at warn
/// - **Format**: `LOG_FORMAT=json` for structured output, compact otherwise
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let format = std::env::var("LOG_FORMAT")
        .map(|value| LogFormat::parse(&value))
        .unwrap_or(LogFormat::Compact);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(console_layer).init();
}
