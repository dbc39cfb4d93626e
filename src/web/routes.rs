// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, mw_admin, mw_auth, servico_handlers},
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/", get(auth_handlers::show_login_form).post(auth_handlers::handle_login))
        .route(
            "/criar_usuario",
            get(auth_handlers::show_signup_form).post(auth_handlers::handle_signup),
        );

    // --- Rotas de Admin ---
    // mw_auth é aplicado no router pai, por isso corre antes deste
    let admin_routes = Router::new()
        .route("/apagar/{id}", post(servico_handlers::handle_apagar))
        .route("/editar/{id}", get(servico_handlers::editar_page))
        .route("/atualizar/{id}", post(servico_handlers::handle_atualizar))
        .route_layer(middleware::from_fn(mw_admin::require_admin));

    // --- Rotas Autenticadas ---
    let authenticated_routes = Router::new()
        .route("/logout", get(auth_handlers::handle_logout))
        .route("/index", get(servico_handlers::index_page))
        .route("/abrir_servico", post(servico_handlers::handle_abrir_servico))
        .route("/lista", get(servico_handlers::lista_page))
        .merge(admin_routes)
        .route_layer(middleware::from_fn(mw_auth::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state)
}
