//! Get blog post by slug query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Blog;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize)]
pub struct GetBlogQuery {
    pub slug: String,
}

#[tracing::instrument(skip(pool), fields(slug = %query.slug))]
pub async fn handle(pool: PgPool, query: GetBlogQuery) -> Result<Envelope<Blog>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = SqlFilter::new().eq_text("slug", Some(query.slug));

    match queries.one::<Blog>(Blog::TABLE, Blog::COLUMNS, &filter).await? {
        Some(blog) => Ok(Envelope::ok(blog)),
        None => Ok(Envelope::fail("Post not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::blogs::commands::create::{self, CreateBlogCommand};

    #[sqlx::test]
    async fn test_handle_finds_post_by_slug(pool: PgPool) -> Result<(), AppError> {
        let command = CreateBlogCommand {
            title: "Market Update".to_string(),
            slug: None,
            body: "Body".to_string(),
            author: None,
            published: true,
        };
        create::handle(pool.clone(), None, command).await?;

        let envelope = handle(
            pool,
            GetBlogQuery {
                slug: "market-update".to_string(),
            },
        )
        .await?;
        assert!(envelope.success);
        assert_eq!(envelope.data.expect("blog").title, "Market Update");
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_missing_slug_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(
            pool,
            GetBlogQuery {
                slug: "nope".to_string(),
            },
        )
        .await?;
        assert!(!envelope.success);
        Ok(())
    }
}
