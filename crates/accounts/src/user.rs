//! Base user entity.

use serde::{Deserialize, Serialize};

use keystone_core::{DomainError, DomainResult, Entity};

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// Base identity entity.
///
/// # Invariants
/// - `name` and `age` are set exactly once, at construction.
/// - There are no setters; a `User` is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    name: String,
    age: i32,
}

impl User {
    /// Build a user from the given attributes without validating them.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Build a user, rejecting a blank name or a negative age.
    pub fn try_new(name: impl Into<String>, age: i32) -> DomainResult<Self> {
        let user = Self::new(name, age);
        user.validate()?;
        Ok(user)
    }

    /// The name supplied at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The age supplied at construction.
    pub fn age(&self) -> i32 {
        self.age
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be blank"));
        }
        if self.age < 0 {
            return Err(DomainError::validation(format!(
                "age cannot be negative (got {})",
                self.age
            )));
        }
        Ok(())
    }
}

impl Entity for User {
    const KIND: &'static str = "user";
}

// ─────────────────────────────────────────────────────────────────────────────
// UserEntity
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that is a `User`, either directly or by embedding one.
///
/// Specialized entities implement `as_user` to expose their embedded base
/// value; `name` and `age` then come for free.
pub trait UserEntity: Entity {
    fn as_user(&self) -> &User;

    fn name(&self) -> &str {
        self.as_user().name()
    }

    fn age(&self) -> i32 {
        self.as_user().age()
    }
}

impl UserEntity for User {
    fn as_user(&self) -> &User {
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
