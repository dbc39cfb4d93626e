// src/templates.rs
use crate::{
    error::AppResult,
    models::servico::{Priority, ServiceRequest},
};
use askama::Template;
use axum::response::Html;

// Struct para o template `login.html` (pasta templates/)
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub erro: Option<String>,
    // Mensagem após um cadastro bem-sucedido
    pub sucesso: Option<String>,
}

#[derive(Template)]
#[template(path = "criar_usuario.html")]
pub struct SignupPage {
    pub erro: Option<String>,
}

// Página inicial: formulário para abrir chamado
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub usuario: String,
    pub is_admin: bool,
    pub prioridades: &'static [Priority],
}

#[derive(Template)]
#[template(path = "lista.html")]
pub struct ListaPage<'a> {
    pub usuario: &'a str,
    pub is_admin: bool,
    pub servicos: &'a [ServiceRequest],
    pub sucesso: Option<String>,
}

/// Uma opção do <select> de prioridade
pub struct PriorityOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "editar.html")]
pub struct EditarPage<'a> {
    pub servico: &'a ServiceRequest,
    pub opcoes: Vec<PriorityOption>,
}

impl<'a> EditarPage<'a> {
    /// Marca a prioridade atual do chamado como selecionada
    pub fn new(servico: &'a ServiceRequest) -> Self {
        let opcoes = Priority::ALL
            .iter()
            .map(|p| PriorityOption {
                label: p.as_str(),
                selected: *p == servico.prioridade,
            })
            .collect();
        Self { servico, opcoes }
    }
}

/// Renderiza um template Askama numa resposta HTML.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    let html = template.render().map_err(|e| {
        tracing::error!("Falha ao renderizar template: {}", e);
        e
    })?;
    Ok(Html(html))
}
