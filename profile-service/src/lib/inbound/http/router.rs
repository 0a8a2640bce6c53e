use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_education::add_education;
use super::handlers::add_experience::add_experience;
use super::handlers::current_user::current_user;
use super::handlers::delete_account::delete_account;
use super::handlers::get_my_profile::get_my_profile;
use super::handlers::get_profile_by_user::get_profile_by_user;
use super::handlers::list_profiles::list_profiles;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::remove_education::remove_education;
use super::handlers::remove_experience::remove_experience;
use super::handlers::upsert_profile::upsert_profile;
use super::middleware::authenticate as auth_middleware;
use crate::domain::profile::service::ProfileService;
use crate::domain::user::service::UserService;
use crate::profile::ports::ProfileRepository;
use crate::user::ports::UserRepository;

/// Shared application state.
///
/// Generic over the repository ports so the integration suite can run the
/// real router against in-memory implementations. The token issuer is the
/// only cross-request state besides the repositories; it is read-only
/// after startup.
pub struct AppState<UR, PR>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    pub user_service: Arc<UserService<UR>>,
    pub profile_service: Arc<ProfileService<PR, UR>>,
    pub token_issuer: Arc<TokenIssuer>,
    pub auth_header: Arc<str>,
}

impl<UR, PR> Clone for AppState<UR, PR>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            profile_service: Arc::clone(&self.profile_service),
            token_issuer: Arc::clone(&self.token_issuer),
            auth_header: Arc::clone(&self.auth_header),
        }
    }
}

pub fn create_router<UR, PR>(
    user_service: Arc<UserService<UR>>,
    profile_service: Arc<ProfileService<PR, UR>>,
    token_issuer: Arc<TokenIssuer>,
    auth_header: &str,
) -> Router
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    let state = AppState {
        user_service,
        profile_service,
        token_issuer,
        auth_header: Arc::from(auth_header),
    };

    let public_routes = Router::new()
        .route("/api/users", post(register::<UR, PR>))
        .route("/api/auth", post(login::<UR, PR>))
        .route("/api/profile", get(list_profiles::<UR, PR>))
        .route("/api/profile/user/:user_id", get(get_profile_by_user::<UR, PR>));

    let protected_routes = Router::new()
        .route("/api/auth", get(current_user::<UR, PR>))
        .route("/api/profile", post(upsert_profile::<UR, PR>))
        .route("/api/profile", delete(delete_account::<UR, PR>))
        .route("/api/profile/me", get(get_my_profile::<UR, PR>))
        .route("/api/profile/experience", put(add_experience::<UR, PR>))
        .route(
            "/api/profile/experience/:exp_id",
            delete(remove_experience::<UR, PR>),
        )
        .route("/api/profile/education", put(add_education::<UR, PR>))
        .route(
            "/api/profile/education/:edu_id",
            delete(remove_education::<UR, PR>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<UR, PR>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
