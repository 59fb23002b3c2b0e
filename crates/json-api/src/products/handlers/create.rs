//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalogue_app::{
    domain::products::{
        data::{NewProduct, ProductInput},
        schema::PRODUCT_RULES,
    },
    validation::validate,
};

use crate::{
    extensions::*,
    products::{IMAGE_FIELD, errors::into_status_error, get::ProductResponse},
    state::State,
    uploads::PendingUpload,
};

/// Multipart form accepted on create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductForm {
    pub name: String,

    pub description: String,

    pub quantity: u32,

    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// ISO date, YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_date: Option<String>,

    pub category: String,

    /// Product image, stored under the upload directory
    #[serde(rename = "imagemProduto", skip_serializing_if = "Option::is_none")]
    #[salvo(schema(format = Binary))]
    pub image: Option<String>,
}

/// Create Product Handler
///
/// Accepts a multipart form with an optional `imagemProduto` file, a
/// urlencoded form, or JSON. The image is only stored once the fields are
/// valid, and is removed again if the product cannot be saved.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body(
        content = ProductForm,
        content_type = "multipart/form-data",
        description = "The new product; JSON and urlencoded bodies take the same fields without the image",
    ),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created", body = ProductResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty, has_image = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = read_payload(req, Some(IMAGE_FIELD)).await?;
    let input = validate::<ProductInput>(PRODUCT_RULES, &payload.fields).or_400()?;

    let span = tracing::Span::current();

    span.record("has_image", payload.file.is_some());

    let upload = match payload.file.as_deref() {
        Some(source) => Some(
            state
                .uploads
                .store(IMAGE_FIELD, source)
                .await
                .or_500("failed to store product image")?,
        ),
        None => None,
    };

    let product = state
        .app
        .products
        .create_product(NewProduct {
            input,
            image_path: upload.as_ref().map(PendingUpload::stored_path),
        })
        .await
        .map_err(into_status_error)?;

    if let Some(upload) = upload {
        upload.keep();
    }

    span.record("product_id", tracing::field::display(product.id));

    res.add_header(LOCATION, format!("/products/search/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    res.render(Json(ProductResponse::from(product)));

    Ok(())
}
