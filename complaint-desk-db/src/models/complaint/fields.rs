use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::complaint::category::ComplaintCategory;
use crate::models::complaint::complaint::ComplaintModel;
use crate::models::complaint::complaint_id::ComplaintId;
use crate::models::complaint::status::ComplaintStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::utils::bounded_string;

/// Raw submission fields as entered on the complaint form
///
/// Every field is free text at this point. Conversion into a
/// [`NewComplaint`] trims whitespace, validates the whole set and reports
/// all offending fields together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplaintFields {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    /// Optional contact number; blank input is treated as absent
    pub phone: Option<String>,

    #[validate(custom(function = "known_category"))]
    pub category: String,

    #[validate(custom(function = "not_blank"))]
    pub subject: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn known_category(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<ComplaintCategory>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_category"))
}

impl ComplaintFields {
    /// Copy of the fields with surrounding whitespace removed
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(str::to_string),
            category: self.category.trim().to_string(),
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Validated complaint content, ready to be stored under a fresh identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub name: HeaplessString<100>,
    pub email: HeaplessString<254>,
    pub phone: Option<HeaplessString<32>>,
    pub category: ComplaintCategory,
    pub subject: HeaplessString<200>,
    pub description: String,
}

impl TryFrom<ComplaintFields> for NewComplaint {
    type Error = RepositoryError;

    fn try_from(fields: ComplaintFields) -> RepositoryResult<Self> {
        let fields = fields.normalized();
        let mut invalid: Vec<String> = match fields.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors.field_errors().keys().map(|k| k.to_string()).collect(),
        };

        let name = bounded_string::<100>("name", &fields.name, &mut invalid);
        let email = bounded_string::<254>("email", &fields.email, &mut invalid);
        let phone = match fields.phone.as_deref() {
            Some(phone) => bounded_string::<32>("phone", phone, &mut invalid).map(Some),
            None => Some(None),
        };
        let subject = bounded_string::<200>("subject", &fields.subject, &mut invalid);
        let category = fields.category.parse::<ComplaintCategory>().ok();

        match (name, email, phone, subject, category) {
            (Some(name), Some(email), Some(phone), Some(subject), Some(category))
                if invalid.is_empty() =>
            {
                Ok(NewComplaint {
                    name,
                    email,
                    phone,
                    category,
                    subject,
                    description: fields.description,
                })
            }
            _ => {
                invalid.sort();
                invalid.dedup();
                Err(RepositoryError::Validation(invalid))
            }
        }
    }
}

impl NewComplaint {
    /// Materialize the stored record: status `received`, no updates and
    /// `created_at == updated_at == now`.
    pub fn into_model(self, id: ComplaintId, now: DateTime<Utc>) -> ComplaintModel {
        ComplaintModel {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            category: self.category,
            subject: self.subject,
            description: self.description,
            status: ComplaintStatus::Received,
            created_at: now,
            updated_at: now,
            assigned_to: None,
            updates: Vec::new(),
        }
    }
}
