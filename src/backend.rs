use crate::assets::BasePath;
use crate::logging::{log_event, LogLevel};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 60 * 60;
const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    base_path: BasePath,
    static_max_age: Duration,
    log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let base_path = BasePath::new(
            &parse_env_non_empty_string("NEO_ORBIT_BASE_PATH").unwrap_or_default(),
        );
        let static_max_age_seconds = parse_env_u64_with_bounds(
            "STATIC_MAX_AGE_SECONDS",
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            base_path,
            static_max_age: Duration::from_secs(static_max_age_seconds),
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Serves the built site under the base path. Page paths with no file behind
/// them (`/about/`, `/resume/`) get `index.html`, which routes on the client.
pub fn build_router(config: ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let base_path = config.base_path.clone();
    let state = AppState { config };

    let router = if base_path.as_str().is_empty() {
        Router::new().fallback_service(static_service)
    } else {
        Router::new().nest_service(base_path.as_str(), static_service)
    };

    router.layer(middleware::from_fn_with_state(state, log_requests))
}

async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if status.is_success() {
        headers.insert(
            header::CACHE_CONTROL,
            cache_control(&format!("public, max-age={}", state.config.static_max_age.as_secs())),
        );
    }

    log_event(
        state.config.log_level,
        if status.is_server_error() { LogLevel::Warn } else { LogLevel::Info },
        "static_request_complete",
        serde_json::json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let log_level = config.log_level;
    let port = config.port;
    let base_path = config.base_path.as_str().to_string();
    let dist_dir = config.dist_dir.display().to_string();

    let app = build_router(config);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        log_level,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{port}{base_path}/"),
            "dist_dir": dist_dir,
        }),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok(), default, bounds)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .map(|value| LogLevel::parse(&value, default))
        .unwrap_or(default)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn test_config(dist_dir: PathBuf, base_path: &str) -> ServerConfig {
        ServerConfig {
            port: 0,
            dist_dir,
            base_path: BasePath::new(base_path),
            static_max_age: Duration::from_secs(120),
            log_level: LogLevel::Warn,
        }
    }

    /// A throwaway `dist/`, removed when the returned guard drops.
    fn write_dist() -> TempDir {
        let dir = tempfile::tempdir().expect("create dist");
        fs::create_dir_all(dir.path().join("tech")).expect("create tech dir");
        fs::write(dir.path().join("index.html"), "<div id=\"app\">orbit-shell</div>").expect("write index");
        fs::write(dir.path().join("tech").join("python.svg"), "<svg>python</svg>").expect("write icon");
        dir
    }

    async fn get(router: Router, path: &str, request_id: Option<&str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let mut stream = TcpStream::connect(address).await.expect("connect");
        let extra = request_id
            .map(|id| format!("{REQUEST_ID_HEADER}: {id}\r\n"))
            .unwrap_or_default();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n{extra}Connection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.expect("write request");

        let mut response = String::new();
        stream.read_to_string(&mut response).await.expect("read response");
        response
    }

    #[test]
    fn test_dist_is_removed_on_drop() {
        let dist = write_dist();
        let path = dist.path().to_path_buf();
        assert!(path.join("index.html").is_file());

        drop(dist);
        assert!(!path.exists());
    }

    #[test]
    fn bounded_values_fall_back_to_default() {
        assert_eq!(parse_u64_with_bounds(Some(" 600 ".to_string()), 5, (0, 1_000)), 600);
        assert_eq!(parse_u64_with_bounds(Some("5000".to_string()), 5, (0, 1_000)), 5);
        assert_eq!(parse_u64_with_bounds(Some("soon".to_string()), 5, (0, 1_000)), 5);
        assert_eq!(parse_u64_with_bounds(None, 5, (0, 1_000)), 5);
    }

    #[test]
    fn generated_request_ids_are_unique() {
        let first = resolve_request_id(&HeaderMap::new());
        let second = resolve_request_id(&HeaderMap::new());
        assert!(first.starts_with("req-"));
        assert_ne!(first, second);

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc "));
        assert_eq!(resolve_request_id(&headers), "abc");
    }

    #[tokio::test]
    async fn serves_assets_under_base_path() {
        let dist = write_dist();
        let router = build_router(test_config(dist.path().to_path_buf(), "/PortfolioORBIT"));

        let response = get(router, "/PortfolioORBIT/tech/python.svg", None).await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("<svg>python</svg>"));
        assert!(response.to_ascii_lowercase().contains("cache-control: public, max-age=120"));
    }

    #[tokio::test]
    async fn page_paths_fall_back_to_index() {
        let dist = write_dist();
        let router = build_router(test_config(dist.path().to_path_buf(), "/PortfolioORBIT"));

        let response = get(router, "/PortfolioORBIT/resume/", Some("req-from-test")).await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("orbit-shell"));
        assert!(response.contains("req-from-test"));
    }

    #[tokio::test]
    async fn paths_outside_base_path_are_not_found() {
        let dist = write_dist();
        let router = build_router(test_config(dist.path().to_path_buf(), "/PortfolioORBIT"));

        let response = get(router, "/tech/python.svg", None).await;
        assert!(response.starts_with("HTTP/1.1 404"), "{response}");
    }

    #[tokio::test]
    async fn empty_base_path_serves_from_root() {
        let dist = write_dist();
        let router = build_router(test_config(dist.path().to_path_buf(), ""));

        let response = get(router, "/about/", None).await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("orbit-shell"));
    }
}
