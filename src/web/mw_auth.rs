// src/web/mw_auth.rs
use crate::{error::AppError, models::user::CurrentUser};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Chave da sessão onde fica o usuário autenticado.
pub const CURRENT_USER_KEY: &str = "current_user";

// Middleware que verifica se o usuário está logado
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session.get::<CurrentUser>(CURRENT_USER_KEY).await {
        Ok(Some(user)) => {
            tracing::debug!("Autenticação MW: '{}' autenticado. Prosseguindo...", user.usuario);
            // Os handlers recebem a identidade pela extensão, não pela sessão
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::debug!("Autenticação MW: sem sessão. Redirecionando para /");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::error!("Autenticação MW: Erro ao ler sessão: {:?}", e);
            Err(AppError::SessionError(format!("Erro ao verificar sessão: {}", e)))
        }
    }
}
