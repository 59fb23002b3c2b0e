//! Products

pub(crate) mod errors;
mod handlers;

pub(crate) use handlers::*;

/// Multipart field carrying the product image.
pub(crate) const IMAGE_FIELD: &str = "imagemProduto";
