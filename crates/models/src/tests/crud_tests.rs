use crate::errors::ModelError;
use crate::product;
use crate::testing::sqlite_memory;
use anyhow::Result;
use sea_orm::{ActiveValue::NotSet, Set};

fn new_product(name: &str, price: f64, description: Option<&str>) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(description.map(str::to_string)),
    }
}

#[tokio::test]
async fn save_without_id_inserts_with_fresh_ids() -> Result<()> {
    let db = sqlite_memory().await?;

    let first = product::save(&db, new_product("Keyboard", 49.9, Some("mechanical"))).await?;
    let second = product::save(&db, new_product("Mouse", 19.5, None)).await?;

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.name, "Keyboard");
    assert_eq!(first.price, 49.9);
    assert_eq!(first.description.as_deref(), Some("mechanical"));
    assert_eq!(second.description, None);
    Ok(())
}

#[tokio::test]
async fn find_by_id_returns_stored_row_or_none() -> Result<()> {
    let db = sqlite_memory().await?;
    let created = product::save(&db, new_product("Lamp", 12.0, Some("desk lamp"))).await?;

    let found = product::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(created));
    assert!(product::find_by_id(&db, 999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn find_all_lists_every_row_in_id_order() -> Result<()> {
    let db = sqlite_memory().await?;
    assert!(product::find_all(&db).await?.is_empty());

    let mut created = Vec::new();
    for i in 0..3 {
        created.push(product::save(&db, new_product(&format!("item {i}"), 1.0 + i as f64, None)).await?);
    }

    let all = product::find_all(&db).await?;
    assert_eq!(all, created);
    Ok(())
}

#[tokio::test]
async fn save_with_id_updates_in_place() -> Result<()> {
    let db = sqlite_memory().await?;
    let created = product::save(&db, new_product("Chair", 80.0, Some("oak"))).await?;

    let mut am: product::ActiveModel = created.clone().into();
    am.name = Set("Armchair".into());
    am.price = Set(120.25);
    am.description = Set(None);
    let updated = product::save(&db, am).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Armchair");
    assert_eq!(updated.price, 120.25);
    assert_eq!(updated.description, None);
    assert_eq!(product::find_by_id(&db, created.id).await?, Some(updated));
    assert_eq!(product::find_all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn save_for_vanished_row_is_not_found() -> Result<()> {
    let db = sqlite_memory().await?;
    let created = product::save(&db, new_product("Ghost", 1.0, None)).await?;
    assert!(product::delete(&db, created.clone()).await?);

    let mut am: product::ActiveModel = created.into();
    am.name = Set("Still here?".into());
    let err = product::save(&db, am).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)), "unexpected error: {err}");
    Ok(())
}

#[tokio::test]
async fn delete_removes_row_and_later_inserts_get_new_ids() -> Result<()> {
    let db = sqlite_memory().await?;
    let a = product::save(&db, new_product("A", 1.0, None)).await?;
    let b = product::save(&db, new_product("B", 2.0, None)).await?;

    assert!(product::delete(&db, a.clone()).await?);
    assert!(product::find_by_id(&db, a.id).await?.is_none());
    assert!(!product::delete(&db, a.clone()).await?);

    let c = product::save(&db, new_product("C", 3.0, None)).await?;
    assert!(c.id > b.id);
    assert_eq!(product::find_all(&db).await?, vec![b, c]);
    Ok(())
}
