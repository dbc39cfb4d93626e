// src/services/servico_service.rs
use crate::{
    error::AppResult,
    models::servico::{ServiceRequest, ServiceRequestForm},
};
use chrono::Local;
use sqlx::SqlitePool;

/// Formato do carimbo de data guardado em cada chamado.
pub const DATA_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Abre um chamado novo e devolve o id atribuído.
pub async fn create_service_request(db_pool: &SqlitePool, form: &ServiceRequestForm) -> AppResult<i64> {
    let data = Local::now().format(DATA_FORMAT).to_string();

    let id = sqlx::query(
        r#"
        INSERT INTO servicos (data, setor, descricao, solicitante, prioridade)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&data)
    .bind(&form.setor)
    .bind(&form.descricao)
    .bind(&form.solicitante)
    .bind(form.prioridade.as_str())
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("Chamado #{} aberto ({}, {}).", id, form.setor, form.prioridade);
    Ok(id)
}

/// Todos os chamados, do mais prioritário ao menos prioritário.
pub async fn list_service_requests(db_pool: &SqlitePool) -> AppResult<Vec<ServiceRequest>> {
    let mut servicos = sqlx::query_as::<_, ServiceRequest>(
        r#"
        SELECT id, data, setor, descricao, solicitante, prioridade
        FROM servicos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;

    sort_by_priority(&mut servicos);
    tracing::debug!("Listados {} chamados.", servicos.len());
    Ok(servicos)
}

/// Ordena por prioridade mantendo a ordem original dentro de cada prioridade.
pub fn sort_by_priority(servicos: &mut [ServiceRequest]) {
    // sort_by_key é estável
    servicos.sort_by_key(|s| s.prioridade.rank());
}

pub async fn find_service_request(db_pool: &SqlitePool, id: i64) -> AppResult<Option<ServiceRequest>> {
    let servico = sqlx::query_as::<_, ServiceRequest>(
        r#"
        SELECT id, data, setor, descricao, solicitante, prioridade
        FROM servicos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    Ok(servico)
}

/// Sobrescreve os campos editáveis. Id e data não mudam. Devolve `false` se o id não existir.
pub async fn update_service_request(db_pool: &SqlitePool, id: i64, form: &ServiceRequestForm) -> AppResult<bool> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE servicos
        SET setor = ?1, descricao = ?2, solicitante = ?3, prioridade = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&form.setor)
    .bind(&form.descricao)
    .bind(&form.solicitante)
    .bind(form.prioridade.as_str())
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Atualização ignorada: chamado #{} não existe.", id);
        Ok(false)
    } else {
        tracing::info!("✅ Chamado #{} atualizado.", id);
        Ok(true)
    }
}

/// Apaga o chamado. Devolve `false` se o id não existir.
pub async fn delete_service_request(db_pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM servicos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Remoção ignorada: chamado #{} não existe.", id);
        Ok(false)
    } else {
        tracing::info!("🗑️ Chamado #{} apagado.", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_pool;
    use crate::models::servico::Priority;

    fn form(setor: &str, prioridade: Priority) -> ServiceRequestForm {
        ServiceRequestForm {
            setor: setor.to_string(),
            descricao: format!("problema no {}", setor),
            solicitante: "Carla".to_string(),
            prioridade,
        }
    }

    fn setores(servicos: &[ServiceRequest]) -> Vec<&str> {
        servicos.iter().map(|s| s.setor.as_str()).collect()
    }

    #[tokio::test]
    async fn listing_orders_alta_media_baixa() {
        let pool = memory_pool().await;
        create_service_request(&pool, &form("RH", Priority::Baixa)).await.unwrap();
        create_service_request(&pool, &form("TI", Priority::Alta)).await.unwrap();
        create_service_request(&pool, &form("Compras", Priority::Media)).await.unwrap();

        let servicos = list_service_requests(&pool).await.unwrap();
        let prioridades: Vec<Priority> = servicos.iter().map(|s| s.prioridade).collect();
        assert_eq!(prioridades, vec![Priority::Alta, Priority::Media, Priority::Baixa]);
        assert_eq!(setores(&servicos), vec!["TI", "Compras", "RH"]);
    }

    #[tokio::test]
    async fn listing_keeps_creation_order_within_a_priority() {
        let pool = memory_pool().await;
        for (setor, p) in [
            ("a", Priority::Baixa),
            ("b", Priority::Alta),
            ("c", Priority::Baixa),
            ("d", Priority::Alta),
            ("e", Priority::Media),
            ("f", Priority::Alta),
        ] {
            create_service_request(&pool, &form(setor, p)).await.unwrap();
        }

        let servicos = list_service_requests(&pool).await.unwrap();
        assert_eq!(setores(&servicos), vec!["b", "d", "f", "e", "a", "c"]);
    }

    #[tokio::test]
    async fn new_request_gets_timestamp_and_form_fields() {
        let pool = memory_pool().await;
        let id = create_service_request(&pool, &form("TI", Priority::Alta)).await.unwrap();

        let servico = find_service_request(&pool, id).await.unwrap().unwrap();
        assert_eq!(servico.setor, "TI");
        assert_eq!(servico.descricao, "problema no TI");
        assert_eq!(servico.solicitante, "Carla");
        assert_eq!(servico.prioridade, Priority::Alta);
        assert!(chrono::NaiveDateTime::parse_from_str(&servico.data, DATA_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn deleting_id_three_leaves_the_rest_untouched() {
        let pool = memory_pool().await;
        for setor in ["s1", "s2", "s3", "s4", "s5"] {
            create_service_request(&pool, &form(setor, Priority::Media)).await.unwrap();
        }
        let antes = list_service_requests(&pool).await.unwrap();

        assert!(delete_service_request(&pool, 3).await.unwrap());

        let depois = list_service_requests(&pool).await.unwrap();
        let esperado: Vec<ServiceRequest> = antes.into_iter().filter(|s| s.id != 3).collect();
        assert_eq!(depois, esperado);
        assert_eq!(depois.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 4, 5]);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let pool = memory_pool().await;
        let a = create_service_request(&pool, &form("a", Priority::Alta)).await.unwrap();
        let b = create_service_request(&pool, &form("b", Priority::Alta)).await.unwrap();
        delete_service_request(&pool, a).await.unwrap();
        delete_service_request(&pool, b).await.unwrap();

        let c = create_service_request(&pool, &form("c", Priority::Alta)).await.unwrap();
        assert!(c > b);
    }

    #[tokio::test]
    async fn update_changes_fields_but_not_id_or_date() {
        let pool = memory_pool().await;
        let id = create_service_request(&pool, &form("TI", Priority::Baixa)).await.unwrap();
        let original = find_service_request(&pool, id).await.unwrap().unwrap();

        let novo = ServiceRequestForm {
            setor: "Financeiro".to_string(),
            descricao: "impressora".to_string(),
            solicitante: "Paulo".to_string(),
            prioridade: Priority::Alta,
        };
        assert!(update_service_request(&pool, id, &novo).await.unwrap());

        let atualizado = find_service_request(&pool, id).await.unwrap().unwrap();
        assert_eq!(atualizado.id, original.id);
        assert_eq!(atualizado.data, original.data);
        assert_eq!(atualizado.setor, "Financeiro");
        assert_eq!(atualizado.descricao, "impressora");
        assert_eq!(atualizado.solicitante, "Paulo");
        assert_eq!(atualizado.prioridade, Priority::Alta);
    }

    #[tokio::test]
    async fn unknown_id_is_a_no_op() {
        let pool = memory_pool().await;
        create_service_request(&pool, &form("TI", Priority::Alta)).await.unwrap();

        assert!(find_service_request(&pool, 42).await.unwrap().is_none());
        assert!(!update_service_request(&pool, 42, &form("x", Priority::Baixa)).await.unwrap());
        assert!(!delete_service_request(&pool, 42).await.unwrap());
        assert_eq!(list_service_requests(&pool).await.unwrap().len(), 1);
    }

    #[test]
    fn sort_is_stable() {
        let linha = |id: i64, prioridade| ServiceRequest {
            id,
            data: String::new(),
            setor: String::new(),
            descricao: String::new(),
            solicitante: String::new(),
            prioridade,
        };
        let mut servicos = vec![
            linha(1, Priority::Media),
            linha(2, Priority::Media),
            linha(3, Priority::Alta),
            linha(4, Priority::Media),
        ];
        sort_by_priority(&mut servicos);
        assert_eq!(servicos.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1, 2, 4]);
    }
}
