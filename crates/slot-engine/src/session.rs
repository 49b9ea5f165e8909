//! The signed-in user, passed explicitly to whatever needs attribution.

use serde::{Deserialize, Serialize};

/// Identity handed over by the external identity provider after sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }

    /// Value that seeds the owner field of a new reservation.
    pub fn default_owner(&self) -> &str {
        &self.user_name
    }
}
