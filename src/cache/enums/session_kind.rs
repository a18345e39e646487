use serde::{Deserialize, Serialize};

/// Which of the two store sessions a signal originates from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Data,
    Invalidation,
}
