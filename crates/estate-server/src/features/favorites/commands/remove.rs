//! Remove favorite command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Favorite;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteCommand {
    pub property_id: i64,
}

#[tracing::instrument(skip(pool), fields(user = %user_id, property_id = command.property_id))]
pub async fn handle(
    pool: PgPool,
    user_id: Uuid,
    command: RemoveFavoriteCommand,
) -> Result<Envelope<()>, AppError> {
    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new()
        .eq_uuid("user_id", Some(user_id))
        .eq_i64("property_id", Some(command.property_id));
    let Some(favorite) = queries
        .one::<Favorite>(Favorite::TABLE, Favorite::COLUMNS, &filter)
        .await?
    else {
        return Ok(Envelope::fail("Favorite not found"));
    };

    let mut uow = UnitOfWork::new(pool, Some(user_id));
    uow.repository::<Favorite>().delete(favorite);
    uow.save_changes().await?;

    Ok(Envelope::message_only("Property removed from saved list"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::favorites::commands::add::{self, AddFavoriteCommand};
    use crate::features::properties::commands::create as create_property;

    #[sqlx::test]
    async fn test_handle_removes_only_the_callers_favorite(
        pool: PgPool,
    ) -> Result<(), AppError> {
        let command = create_property::CreatePropertyCommand {
            title: "A".to_string(),
            description: None,
            price: 100,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        let property_id = create_property::handle(pool.clone(), None, command)
            .await?
            .data
            .expect("seeded property")
            .id;

        let owner = Uuid::new_v4();
        add::handle(pool.clone(), owner, AddFavoriteCommand { property_id }).await?;

        // A different caller cannot remove it.
        let envelope = handle(
            pool.clone(),
            Uuid::new_v4(),
            RemoveFavoriteCommand { property_id },
        )
        .await?;
        assert!(!envelope.success);

        let envelope = handle(pool.clone(), owner, RemoveFavoriteCommand { property_id }).await?;
        assert!(envelope.success);

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(&pool)
            .await
            .map_err(AppError::Database)?;
        assert_eq!(remaining, 0);
        Ok(())
    }
}
