use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::serve;
use axum::{Json, Router};
use directions::common::config::{
    RouteRequest, ServiceConfig, UserRouteRequest,
};
use directions::common::error::{Error, Result};
use directions::loading::network::build_graph;
use directions::loading::postgres::{load_nodes, load_ways};
use directions::routing::directions::generate_directions;
use directions::routing::structs::Itinerary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone)]
struct AppState {
    db: PgPool,
}

/// Problems with the map data are reported as unprocessable, anything which
/// went wrong talking to the database as a bad gateway
fn error_response(err: Error) -> Response {
    let status = match err {
        Error::Database(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    error!(%err, "unable to generate directions");

    let json_response = json!({
        "status": "error",
        "message": err.to_string()
    });

    (status, Json(json_response)).into_response()
}

async fn plan_route(
    pool: &PgPool,
    request: &RouteRequest,
) -> Result<Itinerary> {
    let nodes = load_nodes(pool, request).await?;
    let ways = load_ways(pool, request).await?;

    let graph = build_graph(request, nodes, ways)?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(generate_directions(
        &graph,
        &request.start.address,
        &request.end.address,
        &mut rng,
    ))
}

async fn get_directions(
    State(state): State<AppState>,
    Json(body): Json<UserRouteRequest>,
) -> Response {
    let now = Instant::now();

    let request: RouteRequest = body.into();

    let response = match plan_route(&state.db, &request).await {
        Ok(itinerary) => (StatusCode::OK, Json(itinerary)).into_response(),
        Err(err) => error_response(err),
    };

    let elapsed = now.elapsed();
    info!(?elapsed, "directions request handled");

    response
}

async fn health_check() -> impl IntoResponse {
    let msg = "Directions service is running";

    let json_response = json!({
        "status": "success",
        "message": msg
    });

    Json(json_response)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .expect("Error connecting to postgres!");

    let state = AppState { db: pool };

    let router = Router::new()
        .route("/healthcheck", get(health_check))
        .route("/directions", post(get_directions))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Error binding to the configured address!");
    info!(addr = %config.bind_addr, "listening");
    serve(listener, router).await.expect("Error serving API!");
}
