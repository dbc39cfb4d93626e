// src/models/servico.rs
use serde::Deserialize;
use sqlx::FromRow;
use std::fmt;
use thiserror::Error;

/// Prioridade de um chamado. A ordem da listagem é Alta, Média, Baixa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Priority {
    Alta,
    #[serde(rename = "Média")]
    Media,
    Baixa,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Alta, Priority::Media, Priority::Baixa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Alta => "Alta",
            Priority::Media => "Média",
            Priority::Baixa => "Baixa",
        }
    }

    /// Posição na listagem (menor aparece primeiro).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Alta => 1,
            Priority::Media => 2,
            Priority::Baixa => 3,
        }
    }

    /// Classe CSS usada nos templates
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Alta => "alta",
            Priority::Media => "media",
            Priority::Baixa => "baixa",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("prioridade desconhecida: {0}")]
pub struct UnknownPriority(String);

impl TryFrom<String> for Priority {
    type Error = UnknownPriority;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .ok_or(UnknownPriority(value))
    }
}

// Linha da tabela 'servicos'
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ServiceRequest {
    pub id: i64,
    pub data: String, // "dd/mm/aaaa hh:mm", hora local
    pub setor: String,
    pub descricao: String,
    pub solicitante: String,
    #[sqlx(try_from = "String")]
    pub prioridade: Priority,
}

/// Campos editáveis de um chamado, usados tanto na abertura como na atualização.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRequestForm {
    pub setor: String,
    pub descricao: String,
    pub solicitante: String,
    pub prioridade: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_round_trips_through_its_label() {
        for p in Priority::ALL {
            assert_eq!(Priority::try_from(p.as_str().to_string()).unwrap(), p);
        }
        assert!(Priority::try_from("Media".to_string()).is_err());
        assert!(Priority::try_from("urgente".to_string()).is_err());
    }

    #[test]
    fn ranks_follow_alta_media_baixa() {
        assert!(Priority::Alta.rank() < Priority::Media.rank());
        assert!(Priority::Media.rank() < Priority::Baixa.rank());
    }
}
