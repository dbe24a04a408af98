//! Visibility policy: which recognitions a viewer may see.
//!
//! Both rules are pure functions of (viewer, recognition) and must stay
//! referentially transparent so query results are deterministic.

use crate::types::{Caller, Recognition, Role, Visibility};

/// General listing rule.
///
/// `Hr` and `Manager` have elevated read scope and see every recognition;
/// everyone else sees only `Public` ones.
pub fn general(viewer: &Caller, recognition: &Recognition) -> bool {
    match viewer.role {
        Role::Hr | Role::Manager => true,
        _ => recognition.visibility == Visibility::Public,
    }
}

/// "Mine" listing rule.
///
/// A recognition is visible to the caller it is addressed to, at every
/// visibility level. The level check spans the whole enumeration and so
/// admits everything; it is kept explicit because the contract is
/// per-level, not "ignore visibility".
pub fn mine(viewer: &Caller, recognition: &Recognition) -> bool {
    recognition.recipient_id == viewer.id
        && matches!(
            recognition.visibility,
            Visibility::Public | Visibility::Private | Visibility::Anonymous
        )
}
