// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
    services::user_service,
};
use sqlx::SqlitePool;

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt (com sal) para uma senha.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt (custo {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Procura o usuário e confere a senha. `None` para usuário inexistente ou senha errada.
pub async fn authenticate(db_pool: &SqlitePool, usuario: &str, senha: &str) -> AppResult<Option<User>> {
    let Some(user) = user_service::find_user(db_pool, usuario).await? else {
        tracing::warn!("Usuário não encontrado: {}", usuario);
        return Ok(None);
    };

    if verify_password(senha, &user.senha_hash).await? {
        Ok(Some(user))
    } else {
        tracing::warn!("Senha incorreta para: {}", usuario);
        Ok(None)
    }
}

/// Permissão atribuída no cadastro: admin só com o código correto.
pub fn role_for_signup(codigo_admin: Option<&str>, admin_code: &str) -> Role {
    match codigo_admin {
        Some(codigo) if !admin_code.is_empty() && codigo == admin_code => Role::Admin,
        _ => Role::User,
    }
}
