use utoipa::OpenApi;
use utoipa::ToSchema;

/// Schema mirror of `service::product::ProductDto`.
#[derive(ToSchema)]
pub struct ProductDtoDoc {
    /// Ignored on create; the path id wins on update.
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(schemas(ProductDtoDoc)),
    tags((name = "products"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_product_route() {
        let doc = ApiDoc::openapi();
        let collection = doc.paths.paths.get("/api/products").expect("collection path");
        assert!(collection.operations.len() >= 2);
        let item = doc.paths.paths.get("/api/products/{id}").expect("item path");
        assert_eq!(item.operations.len(), 3);
    }
}
