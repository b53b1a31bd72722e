use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use std::{future::Future, sync::Arc, time::Duration};

use crate::{Authenticator, ServerError, expenses};
use engine::ExpenseService;

#[derive(Clone)]
pub struct ServerState {
    pub service: Arc<ExpenseService>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl ServerState {
    pub fn new(service: ExpenseService, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            service: Arc::new(service),
            authenticator,
        }
    }
}

async fn auth(
    State(state): State<ServerState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = bearer.as_ref().ok().map(|header| header.token());
    if !state.authenticator.authenticate(token) {
        tracing::debug!("rejected unauthenticated request to {}", request.uri());
        return Err(ServerError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Build the application router.
///
/// Every route sits behind the authentication layer; `request_timeout`
/// bounds each request, dropping the in-flight query when it fires.
pub fn router(state: ServerState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/expenses/{id}", get(expenses::get).put(expenses::update))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves, then drain in-flight
/// requests.
pub async fn run_with_listener<F>(
    state: ServerState,
    request_timeout: Duration,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state, request_timeout))
        .with_graceful_shutdown(shutdown)
        .await
}
