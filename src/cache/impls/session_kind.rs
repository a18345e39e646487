use std::fmt;
use crate::cache::enums::session_kind::SessionKind;

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Data => write!(f, "data"),
            SessionKind::Invalidation => write!(f, "invalidation"),
        }
    }
}
