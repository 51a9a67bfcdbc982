use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

fn db_err(e: DbErr) -> errors::ModelError { errors::ModelError::Db(e.to_string()) }

/// All products in ascending id order.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(db_err)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Insert when the primary key is unset, otherwise update that row in place.
///
/// Updating a row that no longer exists yields [`errors::ModelError::NotFound`].
pub async fn save(db: &DatabaseConnection, product: ActiveModel) -> Result<Model, errors::ModelError> {
    let id = match &product.id {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
        ActiveValue::NotSet => None,
    };
    match id {
        None => product.insert(db).await.map_err(db_err),
        Some(id) => product.update(db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => errors::ModelError::not_found("product", id),
            other => db_err(other),
        }),
    }
}

/// Remove the row backing `product`; false when it was already gone.
pub async fn delete(db: &DatabaseConnection, product: Model) -> Result<bool, errors::ModelError> {
    let res = product.delete(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
