//! List contact submissions query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::Contact;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListContactsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub email: Option<String>,
    pub subject_contains: Option<String>,
}

impl ListContactsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_text("email", self.email.clone())
            .contains("subject", self.subject_contains.clone())
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListContactsQuery,
) -> Result<Envelope<Vec<Contact>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(Contact::TABLE, &filter).await?;
    let items = queries
        .page::<Contact>(
            Contact::TABLE,
            Contact::COLUMNS,
            &filter,
            "created_at DESC, id DESC",
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let meta = PaginationMeta::for_params(&pagination, total);
    Ok(Envelope::paginated(items, meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contacts::commands::create::{self, CreateContactCommand};

    async fn seed(pool: &PgPool, email: &str) {
        let command = CreateContactCommand {
            name: "Omar".to_string(),
            email: email.to_string(),
            phone: None,
            subject: None,
            message: "Hello".to_string(),
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed contact");
    }

    #[sqlx::test]
    async fn test_list_filters_by_email(pool: PgPool) -> Result<(), AppError> {
        seed(&pool, "a@example.com").await;
        seed(&pool, "b@example.com").await;

        let query = ListContactsQuery {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].email, "a@example.com");
        Ok(())
    }
}
