//! Marketplace listing types as served by the backend REST API.
//!
//! All types model the camelCase JSON the backend returns. Optional fields
//! carry `#[serde(default)]` so partial records from older backend versions
//! still deserialize; the filter engine defines how each absent field
//! behaves during filtering and sorting.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Measurement unit a listing's price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Kg,
    G,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "KG"),
            Unit::G => write!(f, "G"),
        }
    }
}

/// Moderation state of a listing.
///
/// New listings start as `Pending`; only `Approved` listings are visible to
/// regular users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Pending => write!(f, "PENDING"),
            ListingStatus::Approved => write!(f, "APPROVED"),
            ListingStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A single marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Currency-denominated price. Absent on partial records; the engine
    /// treats an absent price as failing any active price bound and as zero
    /// for price ordering.
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub city: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(default)]
    pub status: ListingStatus,
    /// RFC 3339 timestamp as sent by the backend; parsed on demand so an
    /// unparseable value degrades at comparison time instead of failing
    /// deserialization.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Listing {
    /// Creation time parsed to an instant, or `None` when the timestamp is
    /// missing or unparseable.
    #[must_use]
    pub fn created_at_instant(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// City trimmed and case-folded for comparisons. An absent city yields
    /// the empty string, which never matches a non-empty city filter.
    #[must_use]
    pub fn normalized_city(&self) -> String {
        self.city
            .as_deref()
            .map_or_else(String::new, |c| c.trim().to_lowercase())
    }
}

/// A listing category from the backend catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_deserializes_from_backend_json() {
        let json = r#"{
            "id": 1,
            "title": "Blueberry",
            "description": "Fresh from the forest",
            "price": 5,
            "city": "Vilnius",
            "categoryId": 10,
            "unit": "KG",
            "status": "APPROVED",
            "createdAt": "2024-01-02T00:00:00Z"
        }"#;
        let listing: Listing = serde_json::from_str(json).expect("listing should deserialize");
        assert_eq!(listing.id, 1);
        assert_eq!(listing.title, "Blueberry");
        assert_eq!(listing.price, Some(Decimal::from(5)));
        assert_eq!(listing.city.as_deref(), Some("Vilnius"));
        assert_eq!(listing.category_id, 10);
        assert_eq!(listing.unit, Some(Unit::Kg));
        assert_eq!(listing.status, ListingStatus::Approved);
    }

    #[test]
    fn listing_deserializes_with_optional_fields_absent() {
        let json = r#"{ "id": 2, "title": "Strawberry", "categoryId": 11 }"#;
        let listing: Listing = serde_json::from_str(json).expect("listing should deserialize");
        assert!(listing.description.is_none());
        assert!(listing.price.is_none());
        assert!(listing.city.is_none());
        assert!(listing.unit.is_none());
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(listing.created_at.is_none());
    }

    #[test]
    fn listing_deserializes_fractional_price() {
        let json = r#"{ "id": 3, "title": "Raspberry", "categoryId": 10, "price": 7.50 }"#;
        let listing: Listing = serde_json::from_str(json).expect("listing should deserialize");
        assert_eq!(listing.price, Some(Decimal::new(750, 2)));
    }

    #[test]
    fn created_at_instant_parses_rfc3339() {
        let listing = Listing {
            id: 1,
            title: "Blueberry".to_string(),
            description: None,
            price: None,
            city: None,
            category_id: 10,
            unit: None,
            status: ListingStatus::Approved,
            created_at: Some("2024-01-02T00:00:00Z".to_string()),
            updated_at: None,
        };
        let instant = listing
            .created_at_instant()
            .expect("timestamp should parse");
        assert_eq!(instant.to_rfc3339(), "2024-01-02T00:00:00+00:00");
    }

    #[test]
    fn created_at_instant_none_when_missing_or_garbage() {
        let mut listing = Listing {
            id: 1,
            title: "Blueberry".to_string(),
            description: None,
            price: None,
            city: None,
            category_id: 10,
            unit: None,
            status: ListingStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        assert!(listing.created_at_instant().is_none());

        listing.created_at = Some("yesterday-ish".to_string());
        assert!(listing.created_at_instant().is_none());
    }

    #[test]
    fn normalized_city_trims_and_folds_case() {
        let listing = Listing {
            id: 1,
            title: "Blueberry".to_string(),
            description: None,
            price: None,
            city: Some("  Vilnius  ".to_string()),
            category_id: 10,
            unit: None,
            status: ListingStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(listing.normalized_city(), "vilnius");
    }

    #[test]
    fn normalized_city_empty_when_absent() {
        let listing = Listing {
            id: 1,
            title: "Blueberry".to_string(),
            description: None,
            price: None,
            city: None,
            category_id: 10,
            unit: None,
            status: ListingStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(listing.normalized_city(), "");
    }

    #[test]
    fn unit_serializes_as_uppercase_tags() {
        assert_eq!(serde_json::to_string(&Unit::Kg).unwrap(), "\"KG\"");
        assert_eq!(serde_json::to_string(&Unit::G).unwrap(), "\"G\"");
    }

    #[test]
    fn unit_display_matches_wire_tags() {
        assert_eq!(Unit::Kg.to_string(), "KG");
        assert_eq!(Unit::G.to_string(), "G");
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(ListingStatus::default(), ListingStatus::Pending);
    }

    #[test]
    fn category_deserializes_from_backend_json() {
        let json = r#"{ "id": 10, "name": "Mellenes", "slug": "blueberries" }"#;
        let category: Category = serde_json::from_str(json).expect("category should deserialize");
        assert_eq!(category.id, 10);
        assert_eq!(category.name, "Mellenes");
        assert_eq!(category.slug.as_deref(), Some("blueberries"));
        assert!(category.parent_id.is_none());
    }
}
