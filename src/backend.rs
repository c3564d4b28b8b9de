use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";
const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = non_empty(lookup("STATIC_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;

    serve(listener, config, shutdown_signal()).await?;
    Ok(())
}

async fn serve(
    listener: TcpListener,
    config: HostConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    let config = Arc::new(config);

    log_event(
        &config,
        LogLevel::Info,
        "host_started",
        serde_json::json!({
            "addr": local_addr.to_string(),
            "static_dir": config.static_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn router(config: Arc<HostConfig>) -> Router {
    let index = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, log_requests))
}

async fn healthz() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (
        headers,
        Json(HealthPayload {
            ok: true,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

async fn log_requests(
    State(config): State<Arc<HostConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let level = if status.is_server_error() {
        LogLevel::Info
    } else {
        LogLevel::Debug
    };
    log_event(
        &config,
        level,
        "request",
        serde_json::json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs};
    use tokio::sync::oneshot;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    struct RunningHost {
        base_url: String,
        stop: Option<oneshot::Sender<()>>,
        _bundle: tempfile::TempDir,
    }

    impl Drop for RunningHost {
        fn drop(&mut self) {
            if let Some(stop) = self.stop.take() {
                let _ = stop.send(());
            }
        }
    }

    async fn start_host() -> RunningHost {
        let bundle = tempfile::tempdir().expect("temp bundle dir");
        fs::write(bundle.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        fs::write(bundle.path().join("site.css"), "body{}").expect("write stylesheet");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test port");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let config = HostConfig {
            port: 0,
            static_dir: bundle.path().to_path_buf(),
            log_level: LogLevel::Info,
        };
        let (stop, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = serve(listener, config, async {
                let _ = stopped.await;
            })
            .await;
        });

        RunningHost {
            base_url,
            stop: Some(stop),
            _bundle: bundle,
        }
    }

    #[test]
    fn config_defaults_when_env_is_empty() {
        let config = HostConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_valid_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("STATIC_DIR", "public"),
            ("LOG_LEVEL", "DEBUG"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_rejects_out_of_bounds_and_garbage() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("STATIC_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn debug_events_are_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn healthz_reports_service() {
        let host = start_host().await;

        let response = reqwest::get(format!("{}/healthz", host.base_url))
            .await
            .expect("healthz request");
        assert!(response.status().is_success());
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["ok"], serde_json::Value::Bool(true));
        assert_eq!(body["service"], SERVICE_NAME);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let host = start_host().await;

        let body = reqwest::get(format!("{}/projects/anything", host.base_url))
            .await
            .expect("fallback request")
            .text()
            .await
            .expect("fallback body");
        assert_eq!(body, "<div id=\"app\"></div>");

        let stylesheet = reqwest::get(format!("{}/site.css", host.base_url))
            .await
            .expect("asset request")
            .text()
            .await
            .expect("asset body");
        assert_eq!(stylesheet, "body{}");
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let host = start_host().await;

        let response = reqwest::Client::new()
            .get(format!("{}/healthz", host.base_url))
            .header(REQUEST_ID_HEADER, "trace-42")
            .send()
            .await
            .expect("request with id");

        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("trace-42")
        );
    }
}
