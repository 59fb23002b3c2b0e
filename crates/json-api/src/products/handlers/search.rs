//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalogue_app::domain::products::data::ProductSearch;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Product Search Handler
///
/// Returns products matching any of the supplied filters. `category` and
/// `discount` accept comma-separated values, `price` matches products at or
/// below it. Without filters nothing matches. `nome`, `categoria`, `preco`
/// and `desconto` are accepted as aliases.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    category: QueryParam<String, false>,
    price: QueryParam<String, false>,
    discount: QueryParam<String, false>,
    nome: QueryParam<String, false>,
    categoria: QueryParam<String, false>,
    preco: QueryParam<String, false>,
    desconto: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let search = ProductSearch {
        name: either(name, nome),
        categories: list(either(category, categoria)),
        max_price: max_price(either(price, preco))?,
        discounts: list(either(discount, desconto)),
    };

    let products = state
        .app
        .products
        .search_products(search)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// The first non-empty value of a parameter and its alias.
fn either(
    primary: QueryParam<String, false>,
    alias: QueryParam<String, false>,
) -> Option<String> {
    primary
        .into_inner()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| alias.into_inner().filter(|value| !value.trim().is_empty()))
}

fn list(raw: Option<String>) -> Vec<String> {
    raw.iter()
        .flat_map(|raw| raw.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn max_price(raw: Option<String>) -> Result<Option<f64>, StatusError> {
    raw.filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite())
                .ok_or("not a finite number")
        })
        .transpose()
        .or_400("Query parameter price must be a number")
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalogue_app::domain::products::{MockProductsService, records::ProductId};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/search").get(handler))
    }

    #[test]
    fn splits_comma_separated_lists() {
        assert_eq!(
            list(Some("books, stationery,,".to_string())),
            vec!["books".to_string(), "stationery".to_string()]
        );
        assert!(list(None).is_empty());
    }

    #[tokio::test]
    async fn test_search_without_filters_returns_empty_list() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products()
            .once()
            .withf(ProductSearch::is_empty)
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/products/search")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_search_forwards_every_filter() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_search_products()
            .once()
            .withf(|search| {
                *search
                    == ProductSearch {
                        name: Some("Notebook".to_string()),
                        categories: vec!["books".to_string(), "stationery".to_string()],
                        max_price: Some(10.5),
                        discounts: vec!["10%".to_string()],
                    }
            })
            .return_once(move |_| Ok(vec![make_product(id)]));

        let mut res = TestClient::get(
            "http://example.com/products/search?name=Notebook&category=books,stationery&price=10.5&discount=10%25",
        )
        .send(&make_service(repo))
        .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1, "expected one match");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_accepts_portuguese_parameter_names() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products()
            .once()
            .withf(|search| {
                *search
                    == ProductSearch {
                        name: Some("Caderno".to_string()),
                        categories: vec!["books".to_string()],
                        max_price: Some(20.0),
                        discounts: vec!["5%".to_string()],
                    }
            })
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get(
            "http://example.com/products/search?nome=Caderno&categoria=books&preco=20&desconto=5%25",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_prefers_english_parameter_over_alias() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products()
            .once()
            .withf(|search| search.categories == vec!["books".to_string()])
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products/search?category=books&categoria=livros")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_non_numeric_alias_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products().never();

        let res = TestClient::get("http://example.com/products/search?preco=barato")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_non_numeric_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products().never();

        let res = TestClient::get("http://example.com/products/search?price=cheap")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
