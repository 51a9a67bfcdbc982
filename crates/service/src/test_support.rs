#![cfg(test)]
use std::sync::Arc;

use async_trait::async_trait;
use models::{errors::ModelError, product};

use crate::errors::ServiceError;
use crate::product::{ProductRepository, ProductService, SeaOrmProductRepository};

/// Service over a fresh in-memory SQLite database.
pub async fn sqlite_service() -> Result<ProductService, anyhow::Error> {
    let db = models::testing::sqlite_memory().await?;
    Ok(ProductService::new(Arc::new(SeaOrmProductRepository::new(db))))
}

/// Finds a row on lookup but reports it gone once a write is attempted.
#[derive(Default)]
pub struct VanishingRepository;

fn phantom(id: i64) -> product::Model {
    product::Model { id, name: "phantom".into(), price: 0.0, description: None }
}

#[async_trait]
impl ProductRepository for VanishingRepository {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> { Ok(vec![]) }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> { Ok(Some(phantom(id))) }

    async fn save(&self, _product: product::ActiveModel) -> Result<product::Model, ServiceError> {
        Err(ModelError::not_found("product", 1).into())
    }

    async fn delete(&self, _product: product::Model) -> Result<bool, ServiceError> { Ok(false) }
}

/// Reads succeed, every write fails with a storage fault.
#[derive(Default)]
pub struct ReadOnlyRepository;

#[async_trait]
impl ProductRepository for ReadOnlyRepository {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> { Ok(vec![phantom(1)]) }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> { Ok(Some(phantom(id))) }

    async fn save(&self, _product: product::ActiveModel) -> Result<product::Model, ServiceError> {
        Err(ModelError::Db("attempt to write a readonly database".into()).into())
    }

    async fn delete(&self, _product: product::Model) -> Result<bool, ServiceError> {
        Err(ModelError::Db("attempt to write a readonly database".into()).into())
    }
}
