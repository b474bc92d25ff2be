//! Validated price/stock edits.
//!
//! The edit form collects raw text; `ItemPatch::parse` turns it into either
//! a patch the state machine can apply or an itemised list of field errors.

use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} is not a valid number")]
    Invalid(&'static str),
    #[error("{0} must be a whole number")]
    NotInteger(&'static str),
    #[error("{0} must be >= 0")]
    Negative(&'static str),
}

/// Field-level validation errors for an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid edit")]
pub struct PatchErrors {
    pub price: Option<FieldError>,
    pub stock: Option<FieldError>,
}

impl PatchErrors {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.stock.is_none()
    }
}

/// A validated edit: non-negative finite price, whole non-negative stock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPatch {
    price: f64,
    stock: u32,
}

impl ItemPatch {
    /// Validate already-numeric values.
    pub fn new(price: f64, stock: i64) -> Result<Self, PatchErrors> {
        let errors = PatchErrors {
            price: check_price(price).err(),
            stock: check_stock(stock).err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            price,
            stock: stock as u32,
        })
    }

    /// Validate raw text as typed in the edit form.
    pub fn parse(price: &str, stock: &str) -> Result<Self, PatchErrors> {
        let price = parse_price(price);
        let stock = parse_stock(stock);
        match (price, stock) {
            (Ok(price), Ok(stock)) => Ok(Self { price, stock }),
            (price, stock) => Err(PatchErrors {
                price: price.err(),
                stock: stock.err(),
            }),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

fn check_price(price: f64) -> Result<f64, FieldError> {
    if !price.is_finite() {
        return Err(FieldError::Invalid("price"));
    }
    if price < 0.0 {
        return Err(FieldError::Negative("price"));
    }
    Ok(price)
}

fn check_stock(stock: i64) -> Result<u32, FieldError> {
    if stock < 0 {
        return Err(FieldError::Negative("stock"));
    }
    u32::try_from(stock).map_err(|_| FieldError::Invalid("stock"))
}

fn parse_price(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required("price"));
    }
    let value: f64 = raw.parse().map_err(|_| FieldError::Invalid("price"))?;
    check_price(value)
}

fn parse_stock(raw: &str) -> Result<u32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required("stock"));
    }
    let value: f64 = raw.parse().map_err(|_| FieldError::Invalid("stock"))?;
    if !value.is_finite() {
        return Err(FieldError::Invalid("stock"));
    }
    if value.fract() != 0.0 {
        return Err(FieldError::NotInteger("stock"));
    }
    if value < 0.0 {
        return Err(FieldError::Negative("stock"));
    }
    if value > u32::MAX as f64 {
        return Err(FieldError::Invalid("stock"));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_input() {
        let patch = ItemPatch::parse(" 9.99 ", "3").unwrap();
        assert_eq!(patch.price(), 9.99);
        assert_eq!(patch.stock(), 3);
    }

    #[test]
    fn whole_float_stock_is_accepted() {
        let patch = ItemPatch::parse("0", "12.0").unwrap();
        assert_eq!(patch.stock(), 12);
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = ItemPatch::parse("", "  ").unwrap_err();
        assert_eq!(errors.price, Some(FieldError::Required("price")));
        assert_eq!(errors.stock, Some(FieldError::Required("stock")));
    }

    #[test]
    fn reports_each_field_independently() {
        let errors = ItemPatch::parse("-1", "2.5").unwrap_err();
        assert_eq!(errors.price, Some(FieldError::Negative("price")));
        assert_eq!(errors.stock, Some(FieldError::NotInteger("stock")));

        let errors = ItemPatch::parse("4", "abc").unwrap_err();
        assert_eq!(errors.price, None);
        assert_eq!(errors.stock, Some(FieldError::Invalid("stock")));
    }

    #[test]
    fn non_finite_price_is_invalid() {
        let errors = ItemPatch::parse("NaN", "1").unwrap_err();
        assert_eq!(errors.price, Some(FieldError::Invalid("price")));
        let errors = ItemPatch::parse("inf", "1").unwrap_err();
        assert_eq!(errors.price, Some(FieldError::Invalid("price")));
    }

    #[test]
    fn new_rejects_negative_values() {
        let errors = ItemPatch::new(-0.01, -3).unwrap_err();
        assert_eq!(errors.price, Some(FieldError::Negative("price")));
        assert_eq!(errors.stock, Some(FieldError::Negative("stock")));
        assert!(ItemPatch::new(0.0, 0).is_ok());
    }

    #[test]
    fn field_error_messages() {
        assert_eq!(FieldError::Negative("price").to_string(), "price must be >= 0");
        assert_eq!(FieldError::Required("stock").to_string(), "stock is required");
    }
}
