use service::product::ProductService;

/// Shared per-router state. Cloned into every handler invocation.
#[derive(Clone)]
pub struct ServerState {
    pub products: ProductService,
}

impl ServerState {
    pub fn new(products: ProductService) -> Self { Self { products } }
}
