// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
/// Created on first successful login; never deleted in normal operation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Stable identity-provider subject id. Unique and immutable.
    pub subject_id: String,

    /// Unique email address reported by the identity provider.
    pub email: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An already-verified identity assertion handed over by the external
/// identity provider. The OAuth handshake producing it is out of scope;
/// this is the only identity input the service trusts.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifiedIdentity {
    #[validate(length(min = 1, max = 256))]
    pub subject_id: String,

    #[validate(email)]
    pub email: String,
}
