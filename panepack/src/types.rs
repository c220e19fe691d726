use crate::{
    error::{DimensionTarget, PackError, UnplaceableItem},
    geometry::Rect,
    id::Id,
    parse::positive_size,
};

/// An input to the packing routines.
///
/// `Item` is just a 2D size and a Panepack-generated unique identifier. It's
/// expected that consumers will assign meaning to the given IDs and then use
/// them to associate the packing results back to the application's own objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
}

impl Item {
    /// Creates an item with a fresh ID. Sizes are checked when the item is
    /// packed, not here.
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self { id: Id::new(), size }
    }

    /// Creates an item from signed dimensions, rejecting anything that isn't
    /// positive.
    pub fn try_new(width: i64, height: i64) -> Result<Self, PackError> {
        let size = positive_size(width, height, DimensionTarget::Item(None))?;

        Ok(Self::new(size))
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }
}

impl From<&Item> for Item {
    fn from(item: &Item) -> Self {
        *item
    }
}

/// An item that was placed by the packer.
///
/// `PlacedItem` corresponds 1:1 to an `Item` that was passed into the packer
/// and keeps that item's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedItem {
    pub(crate) id: Id,
    pub(crate) rect: Rect,
}

impl PlacedItem {
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }

    /// The text a renderer shows on this item's box, like `60 x 40`.
    pub fn label(&self) -> String {
        format!("{} x {}", self.rect.size.0, self.rect.size.1)
    }
}

/// One fixed-size page and the items placed on it, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub(crate) size: (u32, u32),
    pub(crate) items: Vec<PlacedItem>,
    pub(crate) overflow: usize,
}

impl Page {
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// How many items didn't fit on this page and were moved on to the pages
    /// after it.
    #[inline]
    pub fn overflow(&self) -> usize {
        self.overflow
    }

    /// Whether another page follows this one.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.overflow > 0
    }

    pub fn used_area(&self) -> u64 {
        self.items.iter().map(|item| item.rect.area()).sum()
    }

    /// The fraction of the page covered by items, between 0 and 1.
    pub fn utilization(&self) -> f64 {
        let page_area = u64::from(self.size.0) * u64::from(self.size.1);

        if page_area == 0 {
            return 0.0;
        }

        self.used_area() as f64 / page_area as f64
    }
}

/// The results from running the packer.
///
/// There is always at least one page, even if nothing was placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub(crate) page_size: (u32, u32),
    pub(crate) pages: Vec<Page>,
    pub(crate) unplaceable: Vec<UnplaceableItem>,
}

impl PackOutput {
    #[inline]
    pub fn page_size(&self) -> (u32, u32) {
        self.page_size
    }

    #[inline]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Items that were larger than the page and appear on no page.
    #[inline]
    pub fn unplaceable(&self) -> &[UnplaceableItem] {
        &self.unplaceable
    }

    pub fn placed_count(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }

    /// Finds where the item with the given ID was placed, returning the
    /// zero-based page index along with the placement.
    pub fn find(&self, id: Id) -> Option<(usize, &PlacedItem)> {
        self.pages.iter().enumerate().find_map(|(index, page)| {
            page.items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (index, item))
        })
    }
}
