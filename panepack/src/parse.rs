//! Turning user-entered text and signed numbers into page and item sizes.
//!
//! Empty, non-numeric, zero, negative, and out of range values are all
//! reported as [`PackError::InvalidDimension`]; nothing is defaulted.

use std::convert::TryFrom;

use crate::{
    error::{DimensionTarget, PackError},
    types::Item,
};

/// Checks that both sides of a size are positive and fit in a `u32`.
pub fn positive_size(
    width: i64,
    height: i64,
    target: DimensionTarget,
) -> Result<(u32, u32), PackError> {
    Ok((
        positive_dimension(width, target)?,
        positive_dimension(height, target)?,
    ))
}

fn positive_dimension(value: i64, target: DimensionTarget) -> Result<u32, PackError> {
    match u32::try_from(value) {
        Ok(dimension) if dimension > 0 => Ok(dimension),
        _ => Err(PackError::invalid_dimension(target, value)),
    }
}

fn parse_dimension(text: &str, target: DimensionTarget) -> Result<u32, PackError> {
    let trimmed = text.trim();

    match trimmed.parse::<i64>() {
        Ok(value) => positive_dimension(value, target),
        Err(_) => Err(PackError::invalid_dimension(target, trimmed)),
    }
}

/// Builds an item from width and height text, as typed into a form.
pub fn parse_item(width: &str, height: &str) -> Result<Item, PackError> {
    let target = DimensionTarget::Item(None);
    let size = (
        parse_dimension(width, target)?,
        parse_dimension(height, target)?,
    );

    Ok(Item::new(size))
}

/// Parses a page size written as `WIDTHxHEIGHT`, like `2440x1220`. Spaces
/// around the separator and an upper case `X` are accepted.
pub fn parse_page_size(text: &str) -> Result<(u32, u32), PackError> {
    let target = DimensionTarget::Page;

    let mut parts = text.splitn(2, |c| c == 'x' || c == 'X');
    let width = parts.next().unwrap_or_default();
    let height = parts
        .next()
        .ok_or_else(|| PackError::invalid_dimension(target, text.trim()))?;

    Ok((
        parse_dimension(width, target)?,
        parse_dimension(height, target)?,
    ))
}
