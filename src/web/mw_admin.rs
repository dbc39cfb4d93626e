// src/web/mw_admin.rs
use crate::models::user::CurrentUser;
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Só deixa passar administradores; os outros voltam para a lista.
/// Deve ser executado *depois* de `require_auth`.
pub async fn require_admin(
    Extension(user): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Response {
    if user.is_admin() {
        tracing::debug!("Admin MW: Acesso admin concedido para {}", user.usuario);
        next.run(request).await
    } else {
        tracing::warn!(
            "Admin MW: Acesso negado para {} em {} {}.",
            user.usuario,
            request.method(),
            request.uri().path()
        );
        Redirect::to("/lista").into_response()
    }
}
