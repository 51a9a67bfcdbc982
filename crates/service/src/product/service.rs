use std::sync::Arc;
use tracing::{info, instrument, warn};

use models::product;

use crate::errors::ServiceError;
use crate::product::{dto::ProductDto, repository::ProductRepository};

/// Application service for the product catalog use cases.
///
/// Holds no state of its own besides the repository handle, so clones are
/// cheap and may be shared across requests.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(ProductDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductDto>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(ProductDto::from))
    }

    /// Persist a new product; `input.id` is ignored and the stored id returned.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: ProductDto) -> Result<ProductDto, ServiceError> {
        let saved = self.repo.save(input.into_new_active_model()).await?;
        info!(id = saved.id, "created product");
        Ok(saved.into())
    }

    /// Overwrite name, price and description of product `id`.
    ///
    /// The path id wins over `input.id`. Returns `None` when no such row exists.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: ProductDto) -> Result<Option<ProductDto>, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut am: product::ActiveModel = existing.into();
        input.apply_to(&mut am);
        match self.repo.save(am).await {
            Ok(saved) => {
                info!(id = saved.id, "updated product");
                Ok(Some(saved.into()))
            }
            Err(e) if e.is_not_found() => {
                warn!(id, "product removed before update was written");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// True when a row existed and was removed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<bool, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(existing) => {
                let removed = self.repo.delete(existing).await?;
                if removed {
                    info!(id, "deleted product");
                }
                Ok(removed)
            }
            None => Ok(false),
        }
    }
}
