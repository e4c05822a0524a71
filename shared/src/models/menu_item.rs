//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Category slugs the menu understands, in display order
pub const MENU_CATEGORIES: &[&str] = &["starters", "main", "desserts", "drinks"];

/// Dietary tag slugs rendered as badges on the menu
pub const DIETARY_TAGS: &[&str] = &[
    "vegetarian",
    "vegan",
    "non-vegetarian",
    "eggetarian",
    "pescatarian",
    "gluten-free",
    "dairy-free",
    "nut-free",
    "egg-free",
    "halal",
    "kosher",
    "keto",
    "paleo",
    "low-carb",
];

pub fn is_menu_category(slug: &str) -> bool {
    MENU_CATEGORIES.contains(&slug)
}

pub fn is_dietary_tag(slug: &str) -> bool {
    DIETARY_TAGS.contains(&slug)
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category slug (see [`MENU_CATEGORIES`])
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    /// Dietary tag slugs (see [`DIETARY_TAGS`])
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub is_available: bool,
    pub created_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = validate_price))]
    pub price: Decimal,
    #[validate(custom(function = validate_category))]
    pub category: String,
    #[validate(length(max = 2048, message = "Image URL is too long"))]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    #[validate(custom(function = validate_dietary))]
    pub dietary: Vec<String>,
    pub sort_order: Option<i32>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048, message = "Image URL is too long"))]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price").with_message("Price cannot be negative".into()));
    }
    Ok(())
}

fn validate_category(slug: &str) -> Result<(), ValidationError> {
    if !is_menu_category(slug) {
        return Err(ValidationError::new("category").with_message("Unknown menu category".into()));
    }
    Ok(())
}

fn validate_dietary(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        if !is_dietary_tag(tag) {
            return Err(
                ValidationError::new("dietary").with_message("Unknown dietary tag".into())
            );
        }
    }
    Ok(())
}

impl MenuItemUpdate {
    /// Validation for fields the derive cannot express on `Option`
    pub fn validate_business(&self) -> Result<(), ValidationError> {
        if let Some(price) = &self.price {
            validate_price(price)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(dietary) = &self.dietary {
            validate_dietary(dietary)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_validation() {
        let item = MenuItemCreate {
            name: "Bruschetta".to_string(),
            description: "Toasted bread topped with tomatoes, garlic, and fresh basil".to_string(),
            price: dec("8.99"),
            category: "starters".to_string(),
            image: "https://example.com/bruschetta.jpg".to_string(),
            featured: false,
            dietary: vec!["vegetarian".to_string()],
            sort_order: None,
        };
        assert!(item.validate().is_ok());

        let bad_category = MenuItemCreate {
            category: "specials".to_string(),
            ..item.clone()
        };
        assert!(bad_category.validate().is_err());

        let bad_tag = MenuItemCreate {
            dietary: vec!["carnivore".to_string()],
            ..item.clone()
        };
        assert!(bad_tag.validate().is_err());

        let negative_price = MenuItemCreate {
            price: dec("-1.00"),
            ..item
        };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_update_business_validation() {
        let update = MenuItemUpdate {
            price: Some(dec("12.50")),
            category: Some("drinks".to_string()),
            ..Default::default()
        };
        assert!(update.validate_business().is_ok());

        let bad = MenuItemUpdate {
            category: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad.validate_business().is_err());
    }
}
