use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::services::Document;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Core,
}

impl Role {
    pub fn is_core(self) -> bool {
        self == Role::Core
    }
}

/// Stored account. Keyed by email, which doubles as the natural key.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,  // unsalted SHA-256 hex digest
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public identity of an account, as returned by register, login and `/me`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    pub fn new(name: String, email: String, role: Role, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            email,
            role,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
        }
    }
}

impl AuthUser {
    pub fn is_core(&self) -> bool {
        self.role.is_core()
    }
}

impl Document for User {
    const COLLECTION: &'static str = "user";

    fn id(&self) -> &str {
        &self.email
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
