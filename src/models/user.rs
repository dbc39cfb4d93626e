// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use thiserror::Error;

/// Permissão de uma conta. Só `Admin` pode editar ou apagar chamados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("permissão desconhecida: {0}")]
pub struct UnknownRole(String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(UnknownRole(value)),
        }
    }
}

// Representa uma linha da tabela 'usuarios'
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub usuario: String,
    pub senha_hash: String,
    #[sqlx(try_from = "String")]
    pub permissao: Role,
}

/// Identidade autenticada guardada na sessão e passada aos handlers via extensão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub usuario: String,
    pub permissao: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.permissao == Role::Admin
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            usuario: user.usuario,
            permissao: user.permissao,
        }
    }
}

// Formulário de login (campos do HTML)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub usuario: String,
    pub senha: String,
}

// Formulário de criação de conta
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub usuario: String,
    pub senha: String,
    #[serde(default)]
    pub codigo_admin: Option<String>,
}
