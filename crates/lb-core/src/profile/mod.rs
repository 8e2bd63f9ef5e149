//! Profile domain models
//!
//! The profile record is the sole persisted domain entity: the name and
//! email collected during onboarding, plus the optional fields edited
//! later on the profile screen.

pub mod validate;

pub use validate::{is_valid_email, is_valid_name};

/// Storage key the serialized profile record lives under.
pub const PROFILE_KEY: &str = "profile";

/// The persisted user profile.
///
/// Serialized as a single JSON blob under [`PROFILE_KEY`]. Only the three
/// required fields are validated; everything else is carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional contact number, not validated by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Optional avatar image location, not validated by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
    #[serde(default)]
    pub notifications: NotificationPrefs,
}

impl ProfileRecord {
    /// Build a record from the three onboarding fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: None,
            avatar_uri: None,
            notifications: NotificationPrefs::default(),
        }
    }
}

/// Notification opt-ins edited on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationPrefs {
    pub order_updates: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}
