//! Public transport stop point.

/// A boarding location returned by the stop search.
///
/// The identifier is the stop's NaPTAN code, which is stable across
/// requests. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPoint {
    id: String,
    display_name: String,
}

impl StopPoint {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// The stop's NaPTAN identifier (e.g. `490000001`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable name, as shown on the stop flag.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
