use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Closed set of complaint categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "complaint_category"))]
pub enum ComplaintCategory {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Product Quality"))]
    ProductQuality,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Delivery Issues"))]
    DeliveryIssues,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Customer Service"))]
    CustomerService,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Billing & Payments"))]
    BillingAndPayments,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Technical Support"))]
    TechnicalSupport,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Returns & Refunds"))]
    ReturnsAndRefunds,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Other"))]
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 7] = [
        ComplaintCategory::ProductQuality,
        ComplaintCategory::DeliveryIssues,
        ComplaintCategory::CustomerService,
        ComplaintCategory::BillingAndPayments,
        ComplaintCategory::TechnicalSupport,
        ComplaintCategory::ReturnsAndRefunds,
        ComplaintCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::ProductQuality => "Product Quality",
            ComplaintCategory::DeliveryIssues => "Delivery Issues",
            ComplaintCategory::CustomerService => "Customer Service",
            ComplaintCategory::BillingAndPayments => "Billing & Payments",
            ComplaintCategory::TechnicalSupport => "Technical Support",
            ComplaintCategory::ReturnsAndRefunds => "Returns & Refunds",
            ComplaintCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintCategory {
    type Err = ();

    /// Matches display names, ignoring surrounding whitespace and ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ComplaintCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

pub fn serialize_category<S>(value: &ComplaintCategory, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize_category<'de, D>(deserializer: D) -> Result<ComplaintCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    value_str.parse().map_err(|_| {
        serde::de::Error::custom(format!("Invalid ComplaintCategory: {value_str}"))
    })
}

pub fn serialize_optional_category<S>(
    value: &Option<ComplaintCategory>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(category) => serializer.serialize_some(category.as_str()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize_optional_category<'de, D>(
    deserializer: D,
) -> Result<Option<ComplaintCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = Option::<String>::deserialize(deserializer)?;
    value_str
        .map(|s| {
            s.parse().map_err(|_| {
                serde::de::Error::custom(format!("Invalid ComplaintCategory: {s}"))
            })
        })
        .transpose()
}
