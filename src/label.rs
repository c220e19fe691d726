use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// The name a piece is shown with in summaries and layout files.
///
/// This is really just a string, but copies of the same piece share one
/// allocation and pieces without a name get a consistent `W x H` label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemLabel(Arc<str>);

impl ItemLabel {
    pub fn new(label: &str) -> Self {
        ItemLabel(label.into())
    }

    /// The label used for pieces that weren't given a name.
    pub fn from_size(size: (u32, u32)) -> Self {
        ItemLabel(format!("{} x {}", size.0, size.1).into())
    }
}

impl AsRef<str> for ItemLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
