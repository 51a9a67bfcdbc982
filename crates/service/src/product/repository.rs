use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::product;

use crate::errors::ServiceError;

/// Storage operations the product service needs.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError>;
    /// Insert when `product.id` is unset, update otherwise.
    async fn save(&self, product: product::ActiveModel) -> Result<product::Model, ServiceError>;
    async fn delete(&self, product: product::Model) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::find_by_id(&self.db, id).await?)
    }

    async fn save(&self, product: product::ActiveModel) -> Result<product::Model, ServiceError> {
        Ok(product::save(&self.db, product).await?)
    }

    async fn delete(&self, product: product::Model) -> Result<bool, ServiceError> {
        Ok(product::delete(&self.db, product).await?)
    }
}
