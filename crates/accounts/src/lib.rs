//! `keystone-accounts` — user entities and their capabilities.
//!
//! `AdminUser` specializes `User` by embedding it (composition, not
//! inheritance) and conforms to the `Service` and `Auditable` capabilities
//! from `keystone-core`.

pub mod admin;
pub mod role;
pub mod user;

pub use admin::AdminUser;
pub use role::Role;
pub use user::{User, UserEntity};
