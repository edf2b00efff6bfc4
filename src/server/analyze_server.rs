use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use log::Level;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{ANALYZE_LOG_TARGET, CORS_ANY, CORS_DEFAULT_ALLOW_METHODS, CORS_MAX_AGE_SECS};
use crate::errors::{ChalkxError, ChalkxResult};
use crate::services::image_analyzer::ImageAnalyzer;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::error_detail::ErrorDetail;

pub struct AnalyzeServer {
    analyzer: Arc<ImageAnalyzer>,
    addr: SocketAddr,
}

impl AnalyzeServer {
    pub fn new(analyzer: Arc<ImageAnalyzer>, addr: SocketAddr) -> Self {
        Self { analyzer, addr }
    }

    /// Serves until Ctrl-C, then drains in-flight requests.
    pub async fn run(self) -> ChalkxResult<()> {
        let routes = routes(Arc::clone(&self.analyzer));

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(self.addr, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("❌ Failed to listen for shutdown signal: {}", e);
                }
                log::info!("🛑 Shutting down analysis server...");
            })
            .map_err(|e| ChalkxError::server_error("bind", &format!("{} ({})", e, self.addr)))?;

        log::info!("🌐 Analysis server listening on http://{}", bound);
        server.await;
        log::info!("✅ Analysis server shutdown complete");

        Ok(())
    }
}

/// `POST /api/analyze` with unrestricted CORS, error bodies as `{"detail": ...}`.
///
/// Preflights are answered directly and echo whatever method and headers the
/// browser asks for; every other response carries `access-control-allow-origin: *`.
pub fn routes(
    analyzer: Arc<ImageAnalyzer>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let preflight = warp::path!("api" / "analyze")
        .and(warp::options())
        .and(warp::header::optional::<String>("access-control-request-method"))
        .and(warp::header::optional::<String>("access-control-request-headers"))
        .map(preflight_reply);

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::json())
        .and(analyzer_filter)
        .and_then(analyze_handler);

    preflight
        .or(analyze)
        .recover(handle_rejection)
        .with(warp::reply::with::header("access-control-allow-origin", CORS_ANY))
        .with(warp::log(ANALYZE_LOG_TARGET))
}

fn preflight_reply(request_method: Option<String>, request_headers: Option<String>) -> impl Reply {
    let allow_methods = request_method.unwrap_or_else(|| CORS_DEFAULT_ALLOW_METHODS.to_string());
    let allow_headers = request_headers.unwrap_or_else(|| CORS_ANY.to_string());

    let reply = warp::reply::with_header(warp::reply(), "access-control-allow-methods", allow_methods);
    let reply = warp::reply::with_header(reply, "access-control-allow-headers", allow_headers);
    warp::reply::with_header(reply, "access-control-max-age", CORS_MAX_AGE_SECS.to_string())
}

async fn analyze_handler(
    request: AnalyzeRequest,
    analyzer: Arc<ImageAnalyzer>,
) -> Result<impl Reply, Infallible> {
    match analyzer.analyze(request).await {
        Ok(result) => Ok(warp::reply::with_status(
            warp::reply::json(&result),
            StatusCode::OK,
        )),
        Err(e) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorDetail::new(e.to_string())),
            e.status_code(),
        )),
    }
}

fn classify_rejection(err: &Rejection) -> (StatusCode, String, Level) {
    if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string(), Level::Warn)
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string(), Level::Warn)
    } else if let Some(e) = err.find::<warp::reject::InvalidHeader>() {
        (StatusCode::BAD_REQUEST, e.to_string(), Level::Warn)
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type".to_string(), Level::Warn)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string(), Level::Warn)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string(), Level::Error)
    }
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail, level) = classify_rejection(&err);

    if level == Level::Error {
        log::error!("❌ Unhandled rejection: {:?}", err);
    } else {
        log::log!(level, "⚠️ Rejected request ({}): {}", status, detail);
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorDetail::new(detail)),
        status,
    ))
}
