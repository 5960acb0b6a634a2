//! Create blog post command
//!
//! Slugs are derived from the title when not supplied and must be unique;
//! the unique index on `blogs.slug` is the source of truth and a violation
//! surfaces as a duplicate-record conflict.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Blog;
use crate::persistence::{StoreError, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogCommand {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl CreateBlogCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Title", &self.title)?;
        validation::max_length("Title", &self.title, 200)?;
        validation::required("Body", &self.body)?;
        Ok(())
    }

    fn slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&self.title),
        }
    }
}

/// Lowercase the title and collapse runs of non-alphanumerics into hyphens
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[tracing::instrument(skip(pool, command), fields(title = %command.title))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreateBlogCommand,
) -> Result<Envelope<Blog>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let slug = command.slug();
    let mut blog = Blog::new(command.title, slug, command.body, command.author);
    blog.published = command.published;

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Blog>().add(blog);
    match uow.save_changes().await {
        Ok(_) => {},
        Err(StoreError::Duplicate(_)) => {
            return Ok(Envelope::fail("A post with this slug already exists"));
        },
        Err(err) => return Err(err.into()),
    }

    let blog = uow.entity(tracked).clone();
    tracing::info!(blog_id = blog.id, slug = %blog.slug, "blog post created");
    Ok(Envelope::ok_with_message(blog, "Post created successfully"))
}
