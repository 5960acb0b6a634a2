//! Create property command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Property;
use crate::persistence::UnitOfWork;

pub const ALLOWED_STATUSES: &[&str] = &["available", "sold", "rented"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyCommand {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[serde(default)]
    pub area_sqm: Option<i32>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "available".to_string()
}

impl CreatePropertyCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Title", &self.title)?;
        validation::max_length("Title", &self.title, 200)?;
        validation::required("City", &self.city)?;
        validation::positive("Price", self.price)?;
        validation::one_of(
            "Status",
            &self.status,
            ALLOWED_STATUSES,
            "available, sold, rented",
        )?;
        Ok(())
    }

    fn into_property(self) -> Property {
        Property::new(
            self.title,
            self.description,
            self.price,
            self.city,
            self.address,
            self.bedrooms,
            self.bathrooms,
            self.area_sqm,
            self.status,
        )
    }
}

#[tracing::instrument(skip(pool, command), fields(title = %command.title, city = %command.city))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreatePropertyCommand,
) -> Result<Envelope<Property>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Property>().add(command.into_property());
    uow.save_changes().await?;

    let property = uow.entity(tracked).clone();
    tracing::info!(property_id = property.id, "property created");
    Ok(Envelope::ok_with_message(
        property,
        "Property created successfully",
    ))
}
