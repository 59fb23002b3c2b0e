//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalogue_app::{
    domain::products::{data::ProductInput, schema::PRODUCT_RULES},
    validation::validate,
};

use crate::{
    extensions::*,
    messages::MessageResponse,
    products::errors::{PRODUCT_NOT_FOUND, into_status_error},
    state::State,
};

/// Product fields accepted as JSON or a urlencoded form.
///
/// The Portuguese names `nome`, `descricao`, `quantidade`, `preco`,
/// `desconto`, `dataDesconto` and `categoria` are accepted as well.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    pub name: String,

    pub description: String,

    pub quantity: u32,

    /// Zero or more
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// ISO date, YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_date: Option<String>,

    pub category: String,
}

/// Product Update Handler
///
/// Replaces the product's fields. Optional fields left out are cleared, the
/// stored image is kept.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body(
        content = ProductRequest,
        content_type = "application/json",
        description = "The replacement fields",
    ),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = read_payload(req, None).await?;
    let update = validate::<ProductInput>(PRODUCT_RULES, &payload.fields).or_400()?;
    let id = id.into_id_or_404(PRODUCT_NOT_FOUND)?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(id));
    span.record("price", update.price);

    state
        .app
        .products
        .update_product(id, update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(MessageResponse::new("Product updated.")))
}
