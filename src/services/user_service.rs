// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
    services::auth_service,
};
use sqlx::SqlitePool;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Busca um usuário pelo nome exato.
pub async fn find_user(db_pool: &SqlitePool, usuario: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando usuário: {}", usuario);
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT usuario, senha_hash, permissao
        FROM usuarios
        WHERE usuario = ?1
        "#,
    )
    .bind(usuario)
    .fetch_optional(db_pool)
    .await?;

    Ok(user)
}

pub async fn count_users(db_pool: &SqlitePool) -> AppResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(db_pool)
        .await?;
    Ok(total)
}

/// Cria uma conta nova. Falha com `UsernameTaken` se o nome já existir.
pub async fn create_user(
    db_pool: &SqlitePool,
    usuario: &str,
    raw_password: &str,
    permissao: Role,
    bcrypt_cost: u32,
) -> AppResult<()> {
    tracing::info!("Tentando criar usuário: {}", usuario);

    if find_user(db_pool, usuario).await?.is_some() {
        tracing::warn!("Falha ao criar usuário: '{}' já existe.", usuario);
        return Err(AppError::UsernameTaken(usuario.to_string()));
    }

    let senha_hash = auth_service::hash_password(raw_password, bcrypt_cost).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO usuarios (usuario, senha_hash, permissao)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(usuario)
    .bind(&senha_hash)
    .bind(permissao.as_str())
    .execute(db_pool)
    .await;

    // Dois cadastros simultâneos: a chave primária decide qual ganha
    if let Err(sqlx::Error::Database(db_err)) = &result {
        if db_err.is_unique_violation() {
            tracing::warn!("Falha ao criar usuário: '{}' já existe (corrida).", usuario);
            return Err(AppError::UsernameTaken(usuario.to_string()));
        }
    }
    result?;

    tracing::info!("✅ Usuário '{}' criado com permissão {}.", usuario, permissao);
    Ok(())
}

/// Cria a conta `admin` inicial se ainda não houver nenhuma conta.
pub async fn ensure_default_admin(db_pool: &SqlitePool, password: &str, bcrypt_cost: u32) -> AppResult<bool> {
    if count_users(db_pool).await? > 0 {
        return Ok(false);
    }
    create_user(db_pool, DEFAULT_ADMIN_USERNAME, password, Role::Admin, bcrypt_cost).await?;
    Ok(true)
}
