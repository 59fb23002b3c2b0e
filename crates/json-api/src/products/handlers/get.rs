//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalogue_app::domain::products::records::ProductRecord;

use crate::{
    extensions::*,
    products::errors::{PRODUCT_NOT_FOUND, into_status_error},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The product's ObjectId, as hex
    pub id: String,

    pub name: String,

    pub description: String,

    /// Units in stock
    pub quantity: u32,

    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// Date the discount applies until, as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_date: Option<String>,

    pub category: String,

    /// Server path of the uploaded image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Incremented on every update
    pub version: i64,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.to_hex(),
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            discount: product.discount,
            discount_date: product.discount_date.map(|date| date.to_string()),
            category: product.category,
            image_path: product.image_path,
            version: product.version,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_id_or_404(PRODUCT_NOT_FOUND)?;

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use catalogue_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/search/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_camel_case_document() -> TestResult {
        let id = ProductId::new();

        let mut product = make_product(id);

        product.discount = Some("10%".to_string());
        product.discount_date = Some(jiff::civil::date(2025, 1, 31));
        product.image_path = Some("uploads/imagemProduto-1.jpg".to_string());

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(move |p| *p == id)
            .return_once(move |_| Ok(product));

        let mut res = TestClient::get(format!("http://example.com/products/search/{id}"))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], id.to_hex().as_str());
        assert_eq!(body["discountDate"], "2025-01-31");
        assert_eq!(body["imagePath"], "uploads/imagemProduto-1.jpg");
        assert_eq!(body["version"], 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get(format!("http://example.com/products/search/{id}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(res.take_string().await?.contains(PRODUCT_NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/search/xyz")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
