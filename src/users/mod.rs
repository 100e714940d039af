use anyhow::{ensure, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// bcrypt cost factor the store hashes passwords at
pub const HASH_COST: u32 = 10;

/// Access role of a user document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Owner,
    Admin,
}

/// User document as persisted by the store.
///
/// Uniqueness of username and email is enforced store-side; this model
/// covers validation, hashing, and the wire shape. Not touched by the
/// listings pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub profile_pic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    ensure!(!trimmed.is_empty(), "{field} is required");
    Ok(trimmed.to_string())
}

impl User {
    /// Create a user document, trimming inputs and hashing the password
    pub fn create(username: &str, email: &str, password: &str) -> Result<Self> {
        let username = required(username, "username")?;
        let email = required(email, "email")?;
        let password = required(password, "password")?;

        let now = Utc::now();
        Ok(Self {
            username,
            email,
            password: bcrypt::hash(&password, HASH_COST).context("Failed to hash password")?,
            role: Role::default(),
            profile_pic: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the password. Only a genuinely changed password is re-hashed,
    /// mirroring the store's save hook.
    pub fn set_password(&mut self, password: &str) -> Result<()> {
        let password = required(password, "password")?;
        if self.verify_password(&password) {
            return Ok(());
        }
        self.password = bcrypt::hash(&password, HASH_COST).context("Failed to hash password")?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password).unwrap_or(false)
    }
}
