//! Query server for electorate lookups.
//!
//! Provides an HTTP API that resolves a longitude/latitude and jurisdiction code to the
//! federal and state/territory divisions containing it. Geocoding happens upstream.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use clap::Parser;
use geo::Point;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use electorate::config::Config;
use electorate::{
    BoundaryStore, DirectorySource, ElectorateResolver, Jurisdiction, ResolveError,
};

mod links;
use links::{federal_profile_url, local_profile_url};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Electorate lookup server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boundary dataset directory (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,
}

/// Application state shared across handlers
struct AppState {
    resolver: ElectorateResolver,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    info!("Electorate Query Server");
    info!("Loading boundaries from {}", config.data_dir.display());

    let store = BoundaryStore::new(DirectorySource::new(&config.data_dir));
    let resolver = ElectorateResolver::new(store, config.supported.iter().copied());

    let resolver = tokio::task::spawn_blocking(move || {
        resolver.preload().map(|_| resolver)
    })
    .await?
    .context("Failed to load boundary datasets")?;

    info!("Local divisions supported for {:?}", resolver.supported());

    let state = Arc::new(AppState { resolver });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/electorate", get(electorate_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", config.listen);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        loaded: state.resolver.store().cache().loaded(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    loaded: Vec<Jurisdiction>,
}

/// Electorate lookup
async fn electorate_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ElectorateQueryParams>,
) -> Result<Json<ElectorateResponse>, (StatusCode, String)> {
    let point = Point::new(params.point_lon, params.point_lat);

    // A first request for a jurisdiction may read its dataset from disk
    let resolution = tokio::task::spawn_blocking(move || {
        state.resolver.resolve_code(point, &params.jurisdiction)
    })
    .await
    .map_err(|e| {
        tracing::error!("Resolution task failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?
    .map_err(|e| match e {
        ResolveError::UnknownJurisdiction(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        ResolveError::Load(_) => {
            tracing::error!("Electorate lookup failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    })?;

    let jurisdiction = resolution.jurisdiction;

    Ok(Json(ElectorateResponse {
        jurisdiction,
        jurisdiction_name: jurisdiction.display_name(),
        federal_profile_url: resolution
            .federal_division
            .as_deref()
            .map(|d| federal_profile_url(jurisdiction, d)),
        local_profile_url: resolution
            .local_division
            .as_deref()
            .and_then(|d| local_profile_url(jurisdiction, d)),
        federal_division: resolution.federal_division,
        local_division: resolution.local_division,
        supported: resolution.supported,
    }))
}

#[derive(Deserialize)]
struct ElectorateQueryParams {
    /// Point longitude
    #[serde(rename = "point.lon")]
    point_lon: f64,
    /// Point latitude
    #[serde(rename = "point.lat")]
    point_lat: f64,
    /// State or territory code, e.g. "QLD"
    jurisdiction: String,
}

#[derive(Debug, Serialize)]
struct ElectorateResponse {
    jurisdiction: Jurisdiction,
    jurisdiction_name: &'static str,
    federal_division: Option<String>,
    local_division: Option<String>,
    supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    federal_profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_profile_url: Option<String>,
}
