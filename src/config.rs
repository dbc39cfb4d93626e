// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://chamados.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_ADMIN_CODE: &str = "7410";
const DEFAULT_ADMIN_PASSWORD: &str = "1234";

// Limites aceites pelo bcrypt
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuração lida das variáveis de ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Chave para assinar o cookie de sessão. `None` gera uma chave aleatória no arranque.
    pub session_secret: Option<String>,
    /// Código que, no cadastro, concede a permissão de admin.
    pub admin_code: String,
    /// Senha da conta `admin` criada quando a tabela de usuários está vazia.
    pub default_admin_password: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::ConfigError(format!("BIND_ADDR inválido: {}", e)))?;

        let session_secret = env::var("SESSION_SECRET").ok();

        let admin_code = env::var("ADMIN_CODE").unwrap_or_else(|_| {
            tracing::warn!("⚠️ ADMIN_CODE não definido, a usar o código padrão.");
            DEFAULT_ADMIN_CODE.to_string()
        });

        let default_admin_password = env::var("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| {
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(raw) => parse_bcrypt_cost(&raw)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            bind_addr,
            session_secret,
            admin_code,
            default_admin_password,
            bcrypt_cost,
        })
    }

    /// Diz se a senha do admin inicial ainda é a padrão.
    pub fn uses_default_admin_password(&self) -> bool {
        self.default_admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

fn parse_bcrypt_cost(raw: &str) -> AppResult<u32> {
    let cost = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| AppError::ConfigError(format!("BCRYPT_COST inválido: {}", e)))?;
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(AppError::ConfigError(format!(
            "BCRYPT_COST deve estar entre {} e {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )));
    }
    Ok(cost)
}

#[cfg(test)]
impl Config {
    /// Configuração para testes: custo mínimo de bcrypt e códigos fixos.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            session_secret: None,
            admin_code: DEFAULT_ADMIN_CODE.to_string(),
            default_admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }
}
