//! Auditable capability.

/// Types that can emit an audit record about themselves.
///
/// Auditing is observational: it must not change the audited value.
pub trait Auditable {
    fn audit(&self);
}
