/// Lifecycle notification raised by a store session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignalKind {
    Error(String),
    Closed,
}
