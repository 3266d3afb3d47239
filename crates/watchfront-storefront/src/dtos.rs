//! Inventory service wire types.
//!
//! Every payload is decoded into one of these shapes and then validated into a
//! domain type. A payload that fails either step is rejected as a whole; no
//! partially decoded value reaches the catalog or the cart.

use serde::{Deserialize, Serialize};
use watchfront_commerce::cart::CartLine;
use watchfront_commerce::catalog::{Company, Product};
use watchfront_commerce::{CommerceError, CompanyId, Currency, Money, ProductId};

/// An identifier the service may send as a JSON string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(u64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(n) => n.to_string(),
        }
    }
}

/// A price sent either as a number or as display text such as `"$49.99"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Number(f64),
    Text(String),
}

impl WirePrice {
    fn to_money(&self) -> Result<Money, CommerceError> {
        match self {
            WirePrice::Number(amount) => Money::from_decimal(*amount, Currency::USD),
            WirePrice::Text(text) => Money::parse(text, Currency::USD),
        }
    }
}

/// `GET /api/products` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "_id")]
    pub id: WireId,
    pub name: String,
    pub price: WirePrice,
    #[serde(default)]
    pub body_location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "imageSrc", alias = "imageRef", default)]
    pub image_src: String,
    #[serde(rename = "numInStock", alias = "stock")]
    pub num_in_stock: i64,
    #[serde(rename = "companyId", default)]
    pub company_id: Option<WireId>,
}

impl ProductDto {
    /// Validate into a catalog product.
    pub fn into_product(self) -> Result<Product, CommerceError> {
        let id = self.id.into_string();
        if id.is_empty() {
            return Err(CommerceError::ValidationError(
                "product has an empty _id".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has an empty name",
                id
            )));
        }
        let stock = u32::try_from(self.num_in_stock).map_err(|_| {
            CommerceError::ValidationError(format!(
                "product {} has invalid numInStock {}",
                id, self.num_in_stock
            ))
        })?;
        let price = self.price.to_money()?;

        Ok(Product {
            id: ProductId::new(id),
            name: self.name,
            price,
            image_ref: self.image_src,
            stock,
            category: self.category,
            body_location: self.body_location,
            company_id: self.company_id.map(|c| CompanyId::new(c.into_string())),
        })
    }
}

/// Validate a whole product listing, failing on the first bad element.
pub fn products_from_wire(dtos: Vec<ProductDto>) -> Result<Vec<Product>, CommerceError> {
    dtos.into_iter().map(ProductDto::into_product).collect()
}

/// `POST /api/cart/{id}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineDto {
    #[serde(rename = "_id")]
    pub id: WireId,
    pub quantity: i64,
}

impl CartLineDto {
    /// Validate into a cart line for the product that was requested.
    pub fn into_line(self, requested: &ProductId) -> Result<CartLine, CommerceError> {
        let id = self.id.into_string();
        if id != requested.as_str() {
            return Err(CommerceError::ValidationError(format!(
                "response _id {} does not match requested product {}",
                id, requested
            )));
        }
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(CommerceError::InvalidQuantity(self.quantity))?;
        Ok(CartLine::new(ProductId::new(id), quantity))
    }
}

/// `GET /api/companies` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDto {
    #[serde(rename = "_id")]
    pub id: WireId,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub url: String,
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Company {
            id: CompanyId::new(dto.id.into_string()),
            name: dto.name,
            country: dto.country,
            url: dto.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json() -> serde_json::Value {
        json!({
            "_id": 6543,
            "name": "Barska GB12166 Fitness Watch with Heart Rate Monitor",
            "price": "$49.99",
            "body_location": "Wrist",
            "category": "Fitness",
            "imageSrc": "data:image/jpeg;base64,AAAA",
            "numInStock": 9,
            "companyId": 19962
        })
    }

    #[test]
    fn test_product_from_service_document() {
        let dto: ProductDto = serde_json::from_value(product_json()).unwrap();
        let product = dto.into_product().unwrap();

        assert_eq!(product.id, ProductId::new("6543"));
        assert_eq!(product.price, Money::new(4999, Currency::USD));
        assert_eq!(product.stock, 9);
        assert_eq!(product.image_ref, "data:image/jpeg;base64,AAAA");
        assert_eq!(product.category.as_deref(), Some("Fitness"));
        assert_eq!(product.company_id, Some(CompanyId::new("19962")));
    }

    #[test]
    fn test_product_aliases_and_numeric_price() {
        let dto: ProductDto = serde_json::from_value(json!({
            "_id": "abc",
            "name": "Casio F-91W",
            "price": 15.99,
            "imageRef": "/img/f91w.png",
            "stock": 0
        }))
        .unwrap();
        let product = dto.into_product().unwrap();
        assert_eq!(product.price.amount_cents, 1599);
        assert_eq!(product.image_ref, "/img/f91w.png");
        assert!(product.is_out_of_stock());
        assert_eq!(product.company_id, None);
    }

    #[test]
    fn test_product_validation_failures() {
        let mut negative = product_json();
        negative["numInStock"] = json!(-1);
        let dto: ProductDto = serde_json::from_value(negative).unwrap();
        assert!(dto.into_product().is_err());

        let mut nameless = product_json();
        nameless["name"] = json!("  ");
        let dto: ProductDto = serde_json::from_value(nameless).unwrap();
        assert!(dto.into_product().is_err());

        let mut bad_price = product_json();
        bad_price["price"] = json!("call us");
        let dto: ProductDto = serde_json::from_value(bad_price).unwrap();
        assert!(matches!(
            dto.into_product(),
            Err(CommerceError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_missing_field_fails_decode() {
        let mut missing = product_json();
        missing.as_object_mut().unwrap().remove("numInStock");
        assert!(serde_json::from_value::<ProductDto>(missing).is_err());
    }

    #[test]
    fn test_listing_fails_as_a_whole() {
        let good: ProductDto = serde_json::from_value(product_json()).unwrap();
        let mut bad = good.clone();
        bad.num_in_stock = -3;
        assert_eq!(products_from_wire(vec![good.clone()]).unwrap().len(), 1);
        assert!(products_from_wire(vec![good, bad]).is_err());
    }

    #[test]
    fn test_cart_line_validation() {
        let requested = ProductId::new("6543");

        let dto: CartLineDto = serde_json::from_value(json!({ "_id": 6543, "quantity": 2 })).unwrap();
        assert_eq!(
            dto.into_line(&requested).unwrap(),
            CartLine::new(requested.clone(), 2)
        );

        let dto: CartLineDto = serde_json::from_value(json!({ "_id": "6543", "quantity": 0 })).unwrap();
        assert_eq!(
            dto.into_line(&requested),
            Err(CommerceError::InvalidQuantity(0))
        );

        let dto: CartLineDto = serde_json::from_value(json!({ "_id": "1111", "quantity": 1 })).unwrap();
        assert!(matches!(
            dto.into_line(&requested),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_cart_line_requires_quantity() {
        assert!(serde_json::from_value::<CartLineDto>(json!({ "_id": "6543" })).is_err());
        assert!(serde_json::from_value::<CartLineDto>(json!({ "_id": "6543", "quantity": "2" })).is_err());
    }

    #[test]
    fn test_company() {
        let dto: CompanyDto = serde_json::from_value(json!({
            "_id": 19962,
            "name": "Barska",
            "country": "United States",
            "url": "http://www.barska.com/"
        }))
        .unwrap();
        let company = Company::from(dto);
        assert_eq!(company.id, CompanyId::new("19962"));
        assert_eq!(company.country, "United States");
    }
}
