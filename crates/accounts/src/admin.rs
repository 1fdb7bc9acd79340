//! Administrative user: a `User` plus a role, conforming to `Service` and
//! `Auditable`.

use serde::{Deserialize, Serialize};

use keystone_core::{Auditable, DomainError, DomainResult, Entity, Service};

use crate::{Role, User, UserEntity};

/// A user that holds a role and can be managed as a service.
///
/// The base attributes live in an embedded `User`, which is always built
/// before the role is attached. Serialized flat: `name`, `age` and `role`
/// sit side by side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(flatten)]
    user: User,
    role: Role,
}

impl AdminUser {
    /// Build an admin user without validating any attribute.
    pub fn new(name: impl Into<String>, age: i32, role: impl Into<Role>) -> Self {
        let user = User::new(name, age);
        Self {
            user,
            role: role.into(),
        }
    }

    /// Build an admin user, applying `User::try_new`'s checks and rejecting
    /// a blank role.
    pub fn try_new(
        name: impl Into<String>,
        age: i32,
        role: impl Into<Role>,
    ) -> DomainResult<Self> {
        let user = User::try_new(name, age)?;
        let role = role.into();
        if role.is_blank() {
            return Err(DomainError::validation("role cannot be blank"));
        }
        Ok(Self { user, role })
    }

    /// The role supplied at construction.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Drop the specialization and keep only the base user.
    pub fn into_user(self) -> User {
        self.user
    }
}

impl Entity for AdminUser {
    const KIND: &'static str = "admin_user";
}

impl UserEntity for AdminUser {
    fn as_user(&self) -> &User {
        &self.user
    }
}

impl AsRef<User> for AdminUser {
    fn as_ref(&self) -> &User {
        &self.user
    }
}

// Run state is not tracked: start/stop are placeholders and the service
// always reports itself as running.
impl Service for AdminUser {
    fn start(&mut self) {
        tracing::debug!(kind = Self::KIND, name = %self.user.name(), "start requested");
    }

    fn stop(&mut self) {
        tracing::debug!(kind = Self::KIND, name = %self.user.name(), "stop requested");
    }

    fn is_running(&self) -> bool {
        true
    }
}

impl Auditable for AdminUser {
    fn audit(&self) {
        tracing::info!(
            target: "audit",
            kind = Self::KIND,
            name = %self.user.name(),
            age = self.user.age(),
            role = %self.role,
            "audit"
        );
    }
}
