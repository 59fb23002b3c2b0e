//! Products Repository

use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{self, Document, doc},
};

use crate::{
    database::{Db, PRODUCTS_COLLECTION},
    domain::products::{
        data::{NewProduct, ProductInput, ProductSearch},
        records::{ProductId, ProductRecord},
    },
};

/// Optional fields cleared when a replacement omits them.
const OPTIONAL_FIELDS: &[&str] = &["discount", "discountDate"];

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    collection: Collection<ProductRecord>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }

    pub(crate) async fn find_products(
        &self,
        filter: Document,
    ) -> Result<Vec<ProductRecord>, mongodb::error::Error> {
        self.collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await
    }

    pub(crate) async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, mongodb::error::Error> {
        self.collection.find_one(by_id(product)).await
    }

    pub(crate) async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, mongodb::error::Error> {
        let NewProduct { input, image_path } = product;

        let record = ProductRecord {
            id: ProductId::new(),
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            price: input.price,
            discount: input.discount,
            discount_date: input.discount_date,
            category: input.category,
            image_path,
            version: 0,
        };

        self.collection.insert_one(&record).await?;

        Ok(record)
    }

    /// Returns the number of matched documents.
    pub(crate) async fn update_product(
        &self,
        product: ProductId,
        update: Document,
    ) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.update_one(by_id(product), update).await?;

        Ok(result.matched_count)
    }

    /// Returns the number of deleted documents.
    pub(crate) async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_one(by_id(product)).await?;

        Ok(result.deleted_count)
    }
}

fn by_id(product: ProductId) -> Document {
    doc! { "_id": product.into_object_id() }
}

/// Filter matching any supplied criterion, or `None` when nothing was supplied.
pub(crate) fn search_filter(search: &ProductSearch) -> Option<Document> {
    let mut clauses = Vec::new();

    if let Some(name) = &search.name {
        clauses.push(doc! { "name": name });
    }

    if !search.categories.is_empty() {
        clauses.push(doc! { "category": { "$in": search.categories.clone() } });
    }

    if let Some(price) = search.max_price {
        clauses.push(doc! { "price": { "$lte": price } });
    }

    if !search.discounts.is_empty() {
        clauses.push(doc! { "discount": { "$in": search.discounts.clone() } });
    }

    (!clauses.is_empty()).then(|| doc! { "$or": clauses })
}

/// Update document replacing every client-owned field and bumping the version.
///
/// The uploaded image path is server-owned and left untouched.
pub(crate) fn replacement(product: &ProductInput) -> Result<Document, bson::ser::Error> {
    let set = bson::to_document(product)?;

    let unset: Document = OPTIONAL_FIELDS
        .iter()
        .filter(|field| !set.contains_key(**field))
        .map(|field| ((*field).to_owned(), bson::Bson::from("")))
        .collect();

    let mut update = doc! {
        "$set": set,
        "$inc": { "version": 1 },
    };

    if !unset.is_empty() {
        update.insert("$unset", unset);
    }

    Ok(update)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn notebook() -> ProductInput {
        ProductInput {
            name: "Notebook".to_string(),
            description: "A5".to_string(),
            quantity: 3,
            price: 4.5,
            discount: None,
            discount_date: None,
            category: "stationery".to_string(),
        }
    }

    #[test]
    fn empty_search_has_no_filter() {
        assert_eq!(search_filter(&ProductSearch::default()), None);
    }

    #[test]
    fn search_ors_supplied_criteria() {
        let filter = search_filter(&ProductSearch {
            name: Some("Notebook".to_string()),
            categories: vec!["stationery".to_string(), "office".to_string()],
            max_price: Some(10.0),
            discounts: vec![],
        });

        assert_eq!(
            filter,
            Some(doc! {
                "$or": [
                    { "name": "Notebook" },
                    { "category": { "$in": ["stationery", "office"] } },
                    { "price": { "$lte": 10.0 } },
                ]
            })
        );
    }

    #[test]
    fn search_on_a_single_criterion() {
        let filter = search_filter(&ProductSearch {
            discounts: vec!["10%".to_string()],
            ..ProductSearch::default()
        });

        assert_eq!(
            filter,
            Some(doc! { "$or": [{ "discount": { "$in": ["10%"] } }] })
        );
    }

    #[test]
    fn replacement_unsets_absent_optional_fields() -> TestResult {
        let update = replacement(&notebook())?;

        let set = update.get_document("$set")?;

        assert_eq!(set.get_str("name")?, "Notebook");
        assert_eq!(set.get_f64("price")?, 4.5);
        assert!(!set.contains_key("discount"), "discount should not be set");
        assert_eq!(update.get_document("$inc")?, &doc! { "version": 1 });
        assert_eq!(
            update.get_document("$unset")?,
            &doc! { "discount": "", "discountDate": "" }
        );

        Ok(())
    }

    #[test]
    fn replacement_keeps_supplied_optional_fields() -> TestResult {
        let update = replacement(&ProductInput {
            discount: Some("5%".to_string()),
            discount_date: Some(jiff::civil::date(2025, 3, 1)),
            ..notebook()
        })?;

        let set = update.get_document("$set")?;

        assert_eq!(set.get_str("discount")?, "5%");
        assert_eq!(set.get_str("discountDate")?, "2025-03-01");
        assert!(!update.contains_key("$unset"), "nothing should be unset");

        Ok(())
    }
}
