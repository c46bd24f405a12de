//! User model as served by the data store API.

use serde::{Deserialize, Serialize};

/// User profile, read through from the data store.
///
/// `Default` is the empty placeholder returned with a 404.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
