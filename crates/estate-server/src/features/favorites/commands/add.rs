//! Add favorite command
//!
//! Saving the same property twice is harmless; the unique (user, property)
//! index turns the second attempt into a soft failure.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::{Favorite, Property};
use crate::persistence::{QueryRepository, SqlFilter, StoreError, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteCommand {
    pub property_id: i64,
}

#[tracing::instrument(skip(pool), fields(user = %user_id, property_id = command.property_id))]
pub async fn handle(
    pool: PgPool,
    user_id: Uuid,
    command: AddFavoriteCommand,
) -> Result<Envelope<Favorite>, AppError> {
    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.property_id));
    if queries
        .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
        .await?
        .is_none()
    {
        return Ok(Envelope::fail("Property not found"));
    }

    let mut uow = UnitOfWork::new(pool, Some(user_id));
    let tracked = uow
        .repository::<Favorite>()
        .add(Favorite::new(user_id, command.property_id));
    match uow.save_changes().await {
        Ok(_) => {},
        Err(StoreError::Duplicate(_)) => {
            return Ok(Envelope::fail("Property is already saved"));
        },
        Err(err) => return Err(err.into()),
    }

    let favorite = uow.entity(tracked).clone();
    Ok(Envelope::ok_with_message(favorite, "Property saved"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::properties::commands::create as create_property;

    async fn seed_property(pool: &PgPool) -> i64 {
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
        create_property::handle(pool.clone(), None, command)
            .await
            .expect("seed property")
            .data
            .expect("seeded property")
            .id
    }

    #[sqlx::test]
    async fn test_handle_saves_property(pool: PgPool) -> Result<(), AppError> {
        let property_id = seed_property(&pool).await;
        let user_id = Uuid::new_v4();

        let envelope = handle(pool, user_id, AddFavoriteCommand { property_id }).await?;
        assert!(envelope.success);
        let favorite = envelope.data.expect("favorite");
        assert_eq!(favorite.user_id, user_id);
        assert_eq!(favorite.property_id, property_id);
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_duplicate_save_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let property_id = seed_property(&pool).await;
        let user_id = Uuid::new_v4();

        handle(pool.clone(), user_id, AddFavoriteCommand { property_id }).await?;
        let envelope = handle(pool, user_id, AddFavoriteCommand { property_id }).await?;
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Property is already saved"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_unknown_property_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(
            pool,
            Uuid::new_v4(),
            AddFavoriteCommand { property_id: 404 },
        )
        .await?;
        assert!(!envelope.success);
        Ok(())
    }
}
