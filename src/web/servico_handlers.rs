// src/web/servico_handlers.rs
use crate::{
    error::AppResult,
    models::{
        servico::{Priority, ServiceRequestForm},
        user::CurrentUser,
    },
    services::servico_service,
    templates::{render, EditarPage, IndexPage, ListaPage},
    web::auth_handlers::FeedbackParams,
};
use axum::{
    extract::{Extension, Form, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;

fn redirect_to_lista(mensagem: &str) -> Redirect {
    let redirect_url = format!("/lista?sucesso={}", urlencoding::encode(mensagem));
    Redirect::to(&redirect_url)
}

// GET /index
pub async fn index_page(Extension(user): Extension<CurrentUser>) -> AppResult<Response> {
    let template = IndexPage {
        is_admin: user.is_admin(),
        usuario: user.usuario,
        prioridades: &Priority::ALL,
    };
    Ok(render(&template)?.into_response())
}

// POST /abrir_servico
pub async fn handle_abrir_servico(
    State(db_pool): State<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<ServiceRequestForm>,
) -> AppResult<Redirect> {
    let id = servico_service::create_service_request(&db_pool, &form).await?;
    tracing::debug!("Chamado #{} aberto por {}", id, user.usuario);
    Ok(Redirect::to("/index"))
}

// GET /lista
pub async fn lista_page(
    State(db_pool): State<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<Response> {
    let servicos = servico_service::list_service_requests(&db_pool).await?;
    let template = ListaPage {
        usuario: &user.usuario,
        is_admin: user.is_admin(),
        servicos: &servicos,
        sucesso: params.sucesso,
    };
    Ok(render(&template)?.into_response())
}

// POST /apagar/{id} (admin)
pub async fn handle_apagar(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Redirect> {
    if servico_service::delete_service_request(&db_pool, id).await? {
        Ok(redirect_to_lista(&format!("Chamado #{} apagado.", id)))
    } else {
        Ok(Redirect::to("/lista"))
    }
}

// GET /editar/{id} (admin)
pub async fn editar_page(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Response> {
    let Some(servico) = servico_service::find_service_request(&db_pool, id).await? else {
        tracing::debug!("GET /editar/{}: chamado não existe, voltando à lista", id);
        return Ok(Redirect::to("/lista").into_response());
    };
    Ok(render(&EditarPage::new(&servico))?.into_response())
}

// POST /atualizar/{id} (admin)
pub async fn handle_atualizar(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Form(form): Form<ServiceRequestForm>,
) -> AppResult<Redirect> {
    if servico_service::update_service_request(&db_pool, id, &form).await? {
        Ok(redirect_to_lista(&format!("Chamado #{} atualizado.", id)))
    } else {
        Ok(Redirect::to("/lista"))
    }
}
