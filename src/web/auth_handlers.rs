// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{CurrentUser, LoginForm, SignupForm},
    services::{auth_service, user_service},
    state::AppState,
    templates::{render, LoginPage, SignupPage},
    web::mw_auth::CURRENT_USER_KEY,
};
use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use serde::Deserialize;
use tower_sessions::Session;

pub const LOGIN_ERROR: &str = "Usuário ou senha incorretos";
pub const USERNAME_TAKEN_ERROR: &str = "Usuário já existe";

/// Mensagem de feedback passada na query string (padrão Post/Redirect/Get)
#[derive(Deserialize, Debug)]
pub struct FeedbackParams {
    pub sucesso: Option<String>,
}

// GET / - formulário de login (ou /index se já estiver logado)
pub async fn show_login_form(
    session: Session,
    Query(params): Query<FeedbackParams>,
) -> AppResult<Response> {
    if session.get::<CurrentUser>(CURRENT_USER_KEY).await?.is_some() {
        tracing::debug!("GET /: Usuário já logado, redirecionando para /index");
        return Ok(Redirect::to("/index").into_response());
    }

    let template = LoginPage { erro: None, sucesso: params.sucesso };
    Ok(render(&template)?.into_response())
}

// POST / - processa o login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Tentativa de login para: {}", form.usuario);

    match auth_service::authenticate(&state.db_pool, &form.usuario, &form.senha).await? {
        Some(user) => {
            // Novo id de sessão a cada login
            session.cycle_id().await?;
            let current = CurrentUser::from(user);
            session.insert(CURRENT_USER_KEY, &current).await?;

            tracing::info!("✅ Login bem-sucedido para: {} ({})", current.usuario, current.permissao);
            Ok(Redirect::to("/index").into_response())
        }
        None => {
            let template = LoginPage { erro: Some(LOGIN_ERROR.to_string()), sucesso: None };
            Ok(render(&template)?.into_response())
        }
    }
}

// GET /logout
pub async fn handle_logout(
    session: Session,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Redirect> {
    session.flush().await?;
    tracing::info!("🚪 Usuário '{}' desligado.", user.usuario);
    Ok(Redirect::to("/"))
}

// GET /criar_usuario
pub async fn show_signup_form() -> AppResult<Response> {
    Ok(render(&SignupPage { erro: None })?.into_response())
}

// POST /criar_usuario
pub async fn handle_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let config = &state.config;
    let permissao = auth_service::role_for_signup(form.codigo_admin.as_deref(), &config.admin_code);
    tracing::info!("Cadastro de '{}' com permissão {}", form.usuario, permissao);

    match user_service::create_user(&state.db_pool, &form.usuario, &form.senha, permissao, config.bcrypt_cost)
        .await
    {
        Ok(()) => {
            let sucesso = urlencoding::encode("Conta criada. Faça login.");
            let redirect_url = format!("/?sucesso={}", sucesso);
            Ok(Redirect::to(&redirect_url).into_response())
        }
        Err(AppError::UsernameTaken(_)) => {
            let template = SignupPage { erro: Some(USERNAME_TAKEN_ERROR.to_string()) };
            Ok(render(&template)?.into_response())
        }
        Err(e) => Err(e),
    }
}
