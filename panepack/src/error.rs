use std::{error::Error, fmt};

use thiserror::Error;

use crate::{id::Id, types::Item};

/// Errors that stop a packing request before anything is placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A page or item dimension was zero, negative, too large, or not a
    /// number at all.
    #[error("invalid {target} dimension {value:?}, expected a positive whole number")]
    InvalidDimension {
        target: DimensionTarget,
        value: String,
    },
}

impl PackError {
    pub(crate) fn invalid_dimension<V: ToString>(target: DimensionTarget, value: V) -> Self {
        PackError::InvalidDimension {
            target,
            value: value.to_string(),
        }
    }
}

/// What an invalid dimension belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionTarget {
    Page,

    /// An item, with its ID if the item had already been created.
    Item(Option<Id>),
}

impl fmt::Display for DimensionTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionTarget::Page => write!(formatter, "page"),
            DimensionTarget::Item(Some(id)) => write!(formatter, "item {}", id),
            DimensionTarget::Item(None) => write!(formatter, "item"),
        }
    }
}

/// An item that is wider or taller than the page and so can never be placed.
///
/// These are reported alongside a successful packing result rather than
/// aborting it; every other item is still packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnplaceableItem {
    pub(crate) item: Item,
    pub(crate) page_size: (u32, u32),
}

impl UnplaceableItem {
    #[inline]
    pub fn item(&self) -> Item {
        self.item
    }

    #[inline]
    pub fn page_size(&self) -> (u32, u32) {
        self.page_size
    }
}

impl fmt::Display for UnplaceableItem {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "item {} ({}x{}) does not fit on a {}x{} page",
            self.item.id(),
            self.item.size.0,
            self.item.size.1,
            self.page_size.0,
            self.page_size.1
        )
    }
}

impl Error for UnplaceableItem {}
