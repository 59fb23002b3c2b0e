//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductInput, ProductSearch},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::{MongoProductsRepository, replacement, search_filter},
    },
};

#[derive(Debug, Clone)]
pub struct MongoProductsService {
    repository: MongoProductsRepository,
}

impl MongoProductsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoProductsRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductsService for MongoProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self
            .repository
            .find_products(mongodb::bson::Document::new())
            .await?)
    }

    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let Some(filter) = search_filter(&search) else {
            return Ok(Vec::new());
        };

        Ok(self.repository.find_products(filter).await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let created = self.repository.create_product(product).await?;

        debug!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductInput,
    ) -> Result<(), ProductsServiceError> {
        let matched = self
            .repository
            .update_product(product, replacement(&update)?)
            .await?;

        if matched == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let deleted = self.repository.delete_product(product).await?;

        if deleted == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves products matching any supplied criterion. No criteria matches nothing.
    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Stores a new product with a fresh id and version 0.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the client-owned fields of a product, bumping its version.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductInput,
    ) -> Result<(), ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
