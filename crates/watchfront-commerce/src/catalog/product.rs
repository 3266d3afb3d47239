//! Product type.

use crate::ids::{CompanyId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the inventory service and never mutated client-side;
/// a product lives as long as the catalog load that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name, the field search matches against.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (URL or data URI) as provided by the service.
    pub image_ref: String,
    /// Units in stock.
    pub stock: u32,
    /// Category (e.g., "Fitness").
    pub category: Option<String>,
    /// Where the watch is worn (e.g., "Wrist").
    pub body_location: Option<String>,
    /// Brand that makes this product.
    pub company_id: Option<CompanyId>,
}

impl Product {
    /// Create a new product with the required fields.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_ref: String::new(),
            stock,
            category: None,
            body_location: None,
            company_id: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the brand.
    pub fn with_company(mut self, company_id: CompanyId) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
