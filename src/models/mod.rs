//! Data models for Roastery.
//!
//! Record types for the two stored collections, plus the id and timestamp
//! factories used when normalizing inbound submissions. Both are pure
//! functions invoked per request; nothing here holds shared state.

mod contact;
mod status_check;

pub use contact::*;
pub use status_check::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new record identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique() {
        let a = new_id();
        let b = new_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
