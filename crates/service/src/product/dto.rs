use models::product;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// JSON-facing representation of a product.
///
/// `id` may be omitted or null on input and is always populated on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<product::Model> for ProductDto {
    fn from(m: product::Model) -> Self {
        Self { id: Some(m.id), name: m.name, price: m.price, description: m.description }
    }
}

impl ProductDto {
    /// Active model for a fresh row. Any client-supplied id is dropped.
    pub fn into_new_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            description: Set(self.description),
        }
    }

    /// Overwrite the mutable columns of `am`, leaving its id untouched.
    pub fn apply_to(self, am: &mut product::ActiveModel) {
        am.name = Set(self.name);
        am.price = Set(self.price);
        am.description = Set(self.description);
    }
}
