use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use notify::{Event, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tower_livereload::LiveReloadLayer;

use crate::controls::ControlValues;
use crate::drag::{PointerSample, StageGeometry};
use crate::events::{PointerPhase, Session, Snapshot};

mod css;
mod inline_js;
mod page;
mod panels;
mod toolbar;
pub(crate) mod util;

/// Session shared by every request. Handlers lock, run the synchronous
/// pipeline and unlock; nothing awaits while holding it.
pub type SharedSession = Arc<Mutex<Session>>;

pub fn shared_session(controls: ControlValues) -> SharedSession {
    Arc::new(Mutex::new(Session::new(controls)))
}

/// Routes of the tool page, without live-reload.
pub fn router(state: SharedSession) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/state", get(serve_state))
        .route("/event", post(serve_event))
        .route("/pointer", post(serve_pointer))
        .route("/export/css", get(serve_export_css))
        .route("/export/html", get(serve_export_html))
        .with_state(state)
}

/// Start the tool server. With a config file, the file is watched and the
/// page reloads whenever it changes.
pub async fn run_dev_server(
    config: Option<PathBuf>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let controls = match &config {
        Some(path) => crate::load_controls(path)?,
        None => ControlValues::default(),
    };
    let state = shared_session(controls);

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let watcher = match &config {
        Some(path) => {
            let watch_path = path.canonicalize()?;
            let dir = watch_path.parent().unwrap_or(Path::new("/")).to_path_buf();
            let session = state.clone();
            let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
                if let Ok(event) = res {
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == watch_path.file_name());
                    if event.kind.is_modify() && ours {
                        reload_config(&session, &watch_path);
                        reloader.reload();
                    }
                }
            })?;
            watcher.watch(&dir, RecursiveMode::NonRecursive)?;
            Some(watcher)
        }
        None => None,
    };

    let app = router(state).layer(livereload);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("layout-lab server");
    log::info!("  page:   http://localhost:{port}/");
    log::info!("  css:    http://localhost:{port}/export/css");
    if let Some(path) = &config {
        log::info!("  config: {} (watching for changes)", path.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    // Keep watcher alive
    drop(watcher);
    Ok(())
}

fn reload_config(session: &SharedSession, path: &Path) {
    let controls = match crate::load_controls(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("keeping previous controls, {}: {e}", path.display());
            return;
        }
    };
    match session.lock() {
        Ok(mut s) => {
            s.load_controls(controls);
            log::info!("reloaded {}", path.display());
        }
        Err(e) => log::error!("session lock poisoned: {e}"),
    }
}

type ApiError = (StatusCode, String);

fn with_session<T>(state: &SharedSession, f: impl FnOnce(&mut Session) -> T) -> Result<T, ApiError> {
    let mut session = state.lock().map_err(|e| {
        log::error!("session lock poisoned: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Lock error: {e}"))
    })?;
    Ok(f(&mut session))
}

// ── Route handlers ────────────────────────────────────────────────────

/// Serve the interactive page, rendered from the current session.
async fn serve_page(State(state): State<SharedSession>) -> Result<Html<String>, ApiError> {
    let html = with_session(&state, |s| page::build_page(&s.snapshot(), &s.dispatcher().routes()))?;
    Ok(Html(html))
}

async fn serve_state(State(state): State<SharedSession>) -> Result<Json<Snapshot>, ApiError> {
    Ok(Json(with_session(&state, |s| s.snapshot())?))
}

// ── POST /event (control input/change) ───────────────────────────────

#[derive(Deserialize)]
struct EventRequest {
    control: String,
    kind: String,
    value: String,
}

async fn serve_event(
    State(state): State<SharedSession>,
    Json(req): Json<EventRequest>,
) -> Result<Json<Snapshot>, ApiError> {
    with_session(&state, |s| {
        s.dispatch_raw(&req.control, &req.kind, &req.value)
            .map(|_| s.snapshot())
            .map_err(|e| {
                log::warn!("rejected event: {e}");
                (StatusCode::BAD_REQUEST, e.to_string())
            })
    })?
    .map(Json)
}

// ── POST /pointer (drag gesture) ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointerRequest {
    phase: String,
    #[serde(flatten)]
    pointer: PointerSample,
    #[serde(default)]
    geometry: StageGeometry,
}

#[derive(Serialize)]
struct PointerResponse {
    handled: bool,
    #[serde(flatten)]
    snapshot: Snapshot,
}

async fn serve_pointer(
    State(state): State<SharedSession>,
    Json(req): Json<PointerRequest>,
) -> Result<Json<PointerResponse>, ApiError> {
    let phase: PointerPhase = req
        .phase
        .parse()
        .map_err(|e: crate::error::LabError| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let response = with_session(&state, |s| {
        let handled = s.pointer(phase, req.pointer, req.geometry);
        PointerResponse {
            handled,
            snapshot: s.snapshot(),
        }
    })?;
    Ok(Json(response))
}

// ── Export routes ─────────────────────────────────────────────────────

async fn serve_export_css(
    State(state): State<SharedSession>,
) -> Result<([(header::HeaderName, &'static str); 2], String), ApiError> {
    let css = with_session(&state, |s| s.rendered().panel_text.clone())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"layout.css\""),
        ],
        css,
    ))
}

async fn serve_export_html(State(state): State<SharedSession>) -> Result<Html<String>, ApiError> {
    let html = with_session(&state, |s| crate::export::standalone_html(s.config()))?;
    Ok(Html(html))
}
