mod config;
mod context;
mod handlers;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use crate::config::Config;
use crate::context::{FormData, RequestContext};
use crate::handlers::{build_routes, error_response, HandlerFn};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    router: Arc<farecast_router::Router>,
    handlers: Arc<HashMap<String, HandlerFn>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("farecast starting...");

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let (route_table, handler_map) = build_routes()?;

    println!("Registered {} routes", route_table.routes().len());
    for route in route_table.routes() {
        println!(
            "  {} -> {}",
            route.pattern,
            route.name.as_deref().unwrap_or("(unnamed)")
        );
    }

    let state = AppState {
        router: route_table,
        handlers: Arc::new(handler_map),
    };

    let app = Router::new()
        .route("/", get(index_handler).post(index_handler))
        .route("/*path", get(path_handler).post(path_handler))
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatch_route(&state, "/", method, headers, body).await
}

async fn path_handler(
    State(state): State<AppState>,
    axum::extract::Path(path): axum::extract::Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let route = format!("/{}", path);
    dispatch_route(&state, &route, method, headers, body).await
}

/// Dispatch a request through the farecast route table
///
/// The axum layer only carries the transport; matching, converter
/// validation, and parameter typing all happen here. A path whose
/// segment fails its converter falls out as "no route" and gets the
/// 404 page.
async fn dispatch_route(
    state: &AppState,
    path: &str,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(matched) = state.router.match_route(path) else {
        info!(%path, "no route matched");
        return error_response(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            &format!("Route '{}' not found", path),
        );
    };

    let form = parse_form(&method, &headers, &body);
    let ctx = RequestContext::new(method, path.to_string(), matched.params, form, headers);

    match state.handlers.get(&matched.route.pattern).cloned() {
        Some(handler) => handler(ctx).await,
        None => error_response(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            &format!("No handler for '{}'", matched.route.pattern),
        ),
    }
}

fn parse_form(method: &Method, headers: &HeaderMap, body: &Bytes) -> FormData {
    if *method != Method::POST {
        return FormData::new();
    }
    let is_urlencoded = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/x-www-form-urlencoded"))
        .unwrap_or(false);
    if !is_urlencoded {
        return FormData::new();
    }
    FormData::from_urlencoded(&String::from_utf8_lossy(body))
}
