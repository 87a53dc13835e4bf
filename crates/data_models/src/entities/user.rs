//! User records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::defaults;
use crate::errors::ValidationError;
use crate::schema::{Fields, Schema};
use crate::value_objects::{FieldMap, validate_email_address};

/// An account on the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Account ID
    pub id: i64,
    /// Login name
    pub username: String,
    /// Contact address
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    /// Display name
    pub full_name: Option<String>,
    /// Whether the account may sign in
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
    /// Account creation time; stamped at construction when left out
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create an active user stamped with the system clock
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new_with_clock(id, username, email, &SystemClock)
    }

    /// Create an active user stamped with `clock`
    pub fn new_with_clock(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            full_name: None,
            is_active: true,
            created_at: clock.now(),
        }
        .validated()
    }
}

impl Schema for User {
    const NAME: &'static str = "User";
    const REQUIRED: &'static [&'static str] = &["id", "username", "email"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.timestamp("created_at");
    }
}

/// A user plus company link, role, and preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// The account
    #[validate(nested)]
    pub user: User,
    /// Company the user works for
    pub company_id: Option<i64>,
    /// Role within that company
    pub role: Option<String>,
    /// Granted permission names
    pub permissions: Option<Vec<String>>,
    /// Free-form UI and notification preferences
    pub preferences: Option<FieldMap>,
}

impl UserProfile {
    /// Create a profile around `user` with no company link or preferences
    pub fn new(user: User) -> Result<Self, ValidationError> {
        Self {
            user,
            company_id: None,
            role: None,
            permissions: None,
            preferences: None,
        }
        .validated()
    }
}

impl Schema for UserProfile {
    const NAME: &'static str = "UserProfile";
    const REQUIRED: &'static [&'static str] = &["user"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.record::<User>("user");
    }
}
