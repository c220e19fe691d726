//! Panepack lays rectangles out on fixed-size pages, like panels on a sheet
//! of stock. It was built for `panecut`, which turns a list of piece sizes
//! into a cutting layout.
//!
//! The packer is deliberately simple and predictable: items are sorted
//! largest area first, each page tracks a single free region, and whatever
//! doesn't fit spills onto the next page. Items are never rotated.
//!
//! ## Example
//! ```
//! use panepack::{Item, Packer};
//!
//! // First, transform the rectangles you want to pack into the Panepack Item
//! // type. Each one gets a unique ID that placements refer back to.
//! let my_items = &[
//!     Item::new((60, 40)),
//!     Item::new((60, 40)),
//!     Item::new((150, 10)),
//! ];
//!
//! // Construct a packer for your page size and compute a layout.
//! let output = Packer::new((100, 100)).pack(my_items).unwrap();
//!
//! assert_eq!(output.pages().len(), 1);
//! assert_eq!(output.pages()[0].items()[1].position(), (0, 40));
//!
//! // The 150x10 item is wider than the page, so it was left out.
//! assert_eq!(output.unplaceable()[0].item().id(), my_items[2].id());
//! ```

mod error;
mod geometry;
mod id;
mod packer;
mod parse;
mod types;

pub use error::*;
pub use geometry::*;
pub use id::*;
pub use packer::*;
pub use parse::*;
pub use types::*;
