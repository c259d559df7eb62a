use crate::state::StateRef;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::Request;
use axum::routing::get;
use axum::{Json, Router};
use idtoken::extract::Identity;
use idtoken::ValidatedIdentity;
use std::iter::once;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::request_id::MakeRequestUuid;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::ServiceBuilderExt;
use tracing::{span, Level};

//--------------------------------------------------------------------------------------------------
// Handlers
//--------------------------------------------------------------------------------------------------

async fn whoami(Identity(identity): Identity) -> Json<ValidatedIdentity> {
    Json(identity)
}

//--------------------------------------------------------------------------------------------------
// Router with the middleware stack
//--------------------------------------------------------------------------------------------------

pub fn router(state: StateRef) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .sensitive_headers(once(AUTHORIZATION))
                .set_x_request_id(MakeRequestUuid)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get("x-request-id")
                                .and_then(|hv| hv.to_str().ok())
                                .unwrap_or("unknown");
                            span!(
                                Level::INFO,
                                "http_request",
                                request_id,
                                http_request.request_method = request.method().as_str(),
                                http_request.request_url = request.uri().path()
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .propagate_x_request_id()
                .layer(TimeoutLayer::new(Duration::from_secs(10))),
        )
}

//--------------------------------------------------------------------------------------------------
