//! List blog posts query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::Blog;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListBlogsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub published: Option<bool>,
    pub author: Option<String>,
    pub title_contains: Option<String>,
}

impl ListBlogsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_bool("published", self.published)
            .eq_text("author", self.author.clone())
            .contains("title", self.title_contains.clone())
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(pool: PgPool, query: ListBlogsQuery) -> Result<Envelope<Vec<Blog>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(Blog::TABLE, &filter).await?;
    let items = queries
        .page::<Blog>(
            Blog::TABLE,
            Blog::COLUMNS,
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
    use crate::features::blogs::commands::create::{self, CreateBlogCommand};

    async fn seed(pool: &PgPool, title: &str, published: bool) {
        let command = CreateBlogCommand {
            title: title.to_string(),
            slug: None,
            body: "Body".to_string(),
            author: None,
            published,
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed blog");
    }

    #[sqlx::test]
    async fn test_list_filters_unpublished_drafts(pool: PgPool) -> Result<(), AppError> {
        seed(&pool, "Live post", true).await;
        seed(&pool, "Draft post", false).await;

        let query = ListBlogsQuery {
            published: Some(true),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Live post");
        Ok(())
    }
}
