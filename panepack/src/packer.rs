use std::cmp::Reverse;

use crate::{
    error::{DimensionTarget, PackError, UnplaceableItem},
    geometry::Rect,
    types::{Item, PackOutput, Page, PlacedItem},
};

/// Packs items onto as many fixed-size pages as it takes.
///
/// Items are sorted largest area first and placed one at a time into a single
/// free region per page. After each placement the free region is cut in two
/// and only the larger strip is kept, so the state for a page is always one
/// rectangle. Items that don't fit are carried over to a fresh page.
#[derive(Debug, Clone, Copy)]
pub struct Packer {
    page_size: (u32, u32),
}

impl Packer {
    pub fn new(page_size: (u32, u32)) -> Self {
        Self { page_size }
    }

    #[inline]
    pub fn page_size(&self) -> (u32, u32) {
        self.page_size
    }

    /// Packs the given items. Accepts anything that can turn into an iterator
    /// of `Item` or `&Item`.
    ///
    /// Fails without placing anything if the page or any item has a zero
    /// dimension. Items larger than the page are left out and reported through
    /// [`PackOutput::unplaceable`].
    pub fn pack<I, T>(&self, items: I) -> Result<PackOutput, PackError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let (page_width, page_height) = self.page_size;
        if page_width == 0 {
            return Err(PackError::invalid_dimension(DimensionTarget::Page, page_width));
        }
        if page_height == 0 {
            return Err(PackError::invalid_dimension(DimensionTarget::Page, page_height));
        }

        let mut remaining_items = Vec::new();
        let mut unplaceable = Vec::new();

        for item in items.into_iter().map(Into::into) {
            let (width, height) = item.size;

            if width == 0 || height == 0 {
                let bad = if width == 0 { width } else { height };
                return Err(PackError::invalid_dimension(
                    DimensionTarget::Item(Some(item.id)),
                    bad,
                ));
            }

            if width > page_width || height > page_height {
                unplaceable.push(UnplaceableItem {
                    item,
                    page_size: self.page_size,
                });
            } else {
                remaining_items.push(item);
            }
        }

        for rejected in &unplaceable {
            log::warn!("Leaving out {}", rejected);
        }

        // Stable, so items with equal area keep the order they came in.
        remaining_items.sort_by_key(|item| Reverse(item.area()));

        let num_items = remaining_items.len();
        log::trace!(
            "Packing {} items onto {}x{} pages",
            num_items,
            page_width,
            page_height
        );

        let mut pages = Vec::new();

        loop {
            let (page, next_remaining) = self.pack_one_page(&remaining_items);
            pages.push(page);

            if next_remaining.is_empty() {
                break;
            }

            // Every remaining item fits on an empty page, so each pass places
            // at least one of them.
            debug_assert!(next_remaining.len() < remaining_items.len());
            remaining_items = next_remaining;
        }

        log::debug!(
            "Finished packing {} items onto {} pages ({} unplaceable)",
            num_items,
            pages.len(),
            unplaceable.len()
        );

        Ok(PackOutput {
            page_size: self.page_size,
            pages,
            unplaceable,
        })
    }

    /// Places as many of `remaining_items` as possible, in order, onto one
    /// page. Returns the page and the items that still need a home.
    fn pack_one_page(&self, remaining_items: &[Item]) -> (Page, Vec<Item>) {
        log::trace!(
            "Trying to pack {} remaining items onto a new page",
            remaining_items.len()
        );

        let mut free = Rect::new((0, 0), self.page_size);
        let mut items: Vec<PlacedItem> = Vec::new();
        let mut unpacked_items = Vec::new();

        for input_item in remaining_items {
            log::trace!(
                "For item {} ({}x{}), searching free region {:?}",
                input_item.id,
                input_item.size.0,
                input_item.size.1,
                free
            );

            match find_placement(&free, input_item.size, &items) {
                Some(rect) => {
                    log::trace!("Placed at {:?}", rect.pos);

                    free = split_free_region(&free, input_item.size);
                    items.push(PlacedItem {
                        id: input_item.id,
                        rect,
                    });
                }
                None => {
                    log::trace!("Did not fit on this page.");

                    unpacked_items.push(*input_item);
                }
            }
        }

        let page = Page {
            size: self.page_size,
            items,
            overflow: unpacked_items.len(),
        };

        (page, unpacked_items)
    }
}

/// Packs `items` onto pages of `page_width` by `page_height`.
pub fn pack<I, T>(items: I, page_width: u32, page_height: u32) -> Result<PackOutput, PackError>
where
    I: IntoIterator<Item = T>,
    T: Into<Item>,
{
    Packer::new((page_width, page_height)).pack(items)
}

/// Scans the free region row by row, top to bottom and left to right, and
/// returns the first spot where an item of `size` overlaps nothing already
/// placed.
fn find_placement(free: &Rect, size: (u32, u32), placed: &[PlacedItem]) -> Option<Rect> {
    let max_dx = free.size.0.checked_sub(size.0)?;
    let max_dy = free.size.1.checked_sub(size.1)?;

    for dy in 0..=max_dy {
        let mut dx = 0;

        while dx <= max_dx {
            let candidate = Rect::new((free.pos.0 + dx, free.pos.1 + dy), size);

            match placed.iter().find(|item| candidate.overlaps(&item.rect)) {
                None => return Some(candidate),

                // Every offset in this row up to the blocker's right edge
                // still overlaps the blocker.
                Some(blocker) => dx = blocker.rect.max().0 - free.pos.0,
            }
        }
    }

    None
}

/// Guillotine cut of `free` after placing an item of `size` at its top-left
/// corner. Keeps the strip to the right if more width than height is left
/// over, and the strip below otherwise.
fn split_free_region(free: &Rect, size: (u32, u32)) -> Rect {
    let remaining_width = free.size.0 - size.0;
    let remaining_height = free.size.1 - size.1;

    if remaining_width > remaining_height {
        Rect::new(
            (free.pos.0 + size.0, free.pos.1),
            (remaining_width, free.size.1),
        )
    } else {
        Rect::new(
            (free.pos.0, free.pos.1 + size.1),
            (free.size.0, remaining_height),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{geometry::overlaps, id::Id};

    fn items(sizes: &[(u32, u32)]) -> Vec<Item> {
        sizes.iter().copied().map(Item::new).collect()
    }

    fn positions(page: &Page) -> Vec<(u32, u32)> {
        page.items().iter().map(PlacedItem::position).collect()
    }

    fn assert_valid_layout(input: &[Item], output: &PackOutput) {
        let (page_width, page_height) = output.page_size();
        let page_rect = Rect::new((0, 0), output.page_size());

        for page in output.pages() {
            for (i, a) in page.items().iter().enumerate() {
                assert!(
                    page_rect.contains(&a.rect()),
                    "{:?} is outside of the {}x{} page",
                    a,
                    page_width,
                    page_height
                );

                for b in &page.items()[i + 1..] {
                    assert!(!overlaps(&a.rect(), &b.rect()), "{:?} overlaps {:?}", a, b);
                }
            }
        }

        for item in input {
            let too_big = item.size().0 > page_width || item.size().1 > page_height;
            let times_placed = output
                .pages()
                .iter()
                .flat_map(Page::items)
                .filter(|placed| placed.id() == item.id())
                .count();

            if too_big {
                assert_eq!(times_placed, 0);
                assert!(output.unplaceable().iter().any(|u| u.item().id() == item.id()));
            } else {
                assert_eq!(times_placed, 1, "{:?} was placed {} times", item, times_placed);

                let (_, placed) = output.find(item.id()).unwrap();
                assert_eq!(placed.size(), item.size());
            }
        }
    }

    #[test]
    fn single_item() {
        let input = items(&[(80, 60)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0)]);
        assert_eq!(output.pages()[0].items()[0].id(), input[0].id());
        assert!(!output.pages()[0].has_next());
    }

    #[test]
    fn full_page_items_get_a_page_each() {
        let input = items(&[(100, 100), (100, 100)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 2);
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0)]);
        assert_eq!(positions(&output.pages()[1]), vec![(0, 0)]);
        assert_eq!(output.pages()[0].overflow(), 1);
        assert!(output.pages()[0].has_next());
        assert!(!output.pages()[1].has_next());

        // Equal areas keep their input order.
        assert_eq!(output.pages()[0].items()[0].id(), input[0].id());
        assert_eq!(output.pages()[1].items()[0].id(), input[1].id());
    }

    #[test]
    fn splits_below_when_more_height_remains() {
        let input = items(&[(60, 40), (60, 40)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0), (0, 40)]);
        assert_valid_layout(&input, &output);
    }

    #[test]
    fn splits_right_when_more_width_remains() {
        let input = items(&[(40, 60), (40, 60)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0), (40, 0)]);
    }

    #[test]
    fn discarded_strip_is_not_reused() {
        // After 60x40 the region below is kept ({0, 40, 100, 60}) and the 40x40
        // gap to the right of it is thrown away. The 100x23 then takes (0, 40),
        // leaving {0, 63, 100, 37}, too short for the 40x40 even though the
        // gap at (60, 0) would hold it.
        let input = items(&[(60, 40), (100, 23), (40, 40)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 2);
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0), (0, 40)]);
        assert_eq!(positions(&output.pages()[1]), vec![(0, 0)]);
        assert_valid_layout(&input, &output);
    }

    #[test]
    fn sorted_by_area_before_placing() {
        let input = items(&[(10, 10), (90, 90), (20, 20)]);
        let output = pack(&input, 200, 200).unwrap();
        let page = &output.pages()[0];

        assert_eq!(page.items()[0].id(), input[1].id());
        assert_eq!(page.items()[1].id(), input[2].id());
        assert_eq!(page.items()[2].id(), input[0].id());
    }

    #[test]
    fn later_items_can_fill_after_an_overflow() {
        // The second 70x70 overflows but the free region is untouched, so the
        // 30x30 behind it still lands on the first page.
        let input = items(&[(70, 70), (70, 70), (30, 30)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 2);
        assert_eq!(output.pages()[0].items().len(), 2);
        assert_eq!(output.pages()[0].items()[1].id(), input[2].id());
        assert_eq!(positions(&output.pages()[0]), vec![(0, 0), (0, 70)]);
        assert_eq!(output.pages()[1].items()[0].id(), input[1].id());
    }

    #[test]
    fn no_items_gives_one_empty_page() {
        let output = pack(Vec::<Item>::new(), 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert!(output.pages()[0].items().is_empty());
        assert!(!output.pages()[0].has_next());
        assert_eq!(output.placed_count(), 0);
    }

    #[test]
    fn zero_sized_item_is_invalid() {
        let input = items(&[(50, 50), (0, 10)]);
        let result = pack(&input, 100, 100);

        assert_eq!(
            result,
            Err(PackError::InvalidDimension {
                target: DimensionTarget::Item(Some(input[1].id())),
                value: "0".to_owned(),
            })
        );
    }

    #[test]
    fn zero_sized_page_is_invalid() {
        let input = items(&[(10, 10)]);

        assert!(matches!(
            pack(&input, 0, 100),
            Err(PackError::InvalidDimension {
                target: DimensionTarget::Page,
                ..
            })
        ));
        assert!(matches!(
            pack(&input, 100, 0),
            Err(PackError::InvalidDimension {
                target: DimensionTarget::Page,
                ..
            })
        ));
    }

    #[test]
    fn oversized_items_are_reported_not_placed() {
        let input = items(&[(150, 10), (10, 150), (50, 50)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert_eq!(output.placed_count(), 1);
        assert_eq!(output.unplaceable().len(), 2);
        assert_eq!(output.unplaceable()[0].item().id(), input[0].id());
        assert_eq!(output.unplaceable()[0].page_size(), (100, 100));
        assert!(output.find(input[0].id()).is_none());
        assert_valid_layout(&input, &output);
    }

    #[test]
    fn only_oversized_items() {
        let input = items(&[(150, 10)]);
        let output = pack(&input, 100, 100).unwrap();

        assert_eq!(output.pages().len(), 1);
        assert!(output.pages()[0].items().is_empty());
        assert_eq!(output.unplaceable().len(), 1);
    }

    #[test]
    fn placement_skips_past_blockers() {
        let blocker = PlacedItem {
            id: Id::new(),
            rect: Rect::new((0, 0), (30, 10)),
        };
        let free = Rect::new((0, 0), (100, 100));

        let found = find_placement(&free, (20, 20), &[blocker]).unwrap();
        assert_eq!(found.pos, (30, 0));

        assert!(find_placement(&free, (101, 1), &[]).is_none());
        assert!(find_placement(&free, (1, 101), &[]).is_none());
    }

    #[test]
    fn placement_moves_down_when_a_row_is_blocked() {
        let blocker = PlacedItem {
            id: Id::new(),
            rect: Rect::new((0, 0), (100, 10)),
        };
        let free = Rect::new((0, 0), (100, 100));

        let found = find_placement(&free, (20, 20), &[blocker]).unwrap();
        assert_eq!(found.pos, (0, 10));
    }

    #[test]
    fn split_ties_go_below() {
        let free = Rect::new((10, 20), (50, 50));

        assert_eq!(
            split_free_region(&free, (30, 30)),
            Rect::new((10, 50), (50, 20))
        );
        assert_eq!(
            split_free_region(&free, (10, 40)),
            Rect::new((20, 20), (40, 50))
        );
    }

    #[test]
    fn deterministic() {
        let input = items(&[
            (30, 20),
            (20, 30),
            (10, 60),
            (60, 10),
            (45, 45),
            (25, 25),
            (25, 25),
            (80, 15),
        ]);

        let first = pack(&input, 100, 80).unwrap();
        let second = pack(&input, 100, 80).unwrap();

        assert_eq!(first, second);
        assert_valid_layout(&input, &first);
    }

    #[test]
    fn adding_items_never_removes_pages() {
        let sizes = [
            (50, 30),
            (70, 20),
            (20, 90),
            (40, 40),
            (100, 10),
            (35, 60),
            (15, 15),
            (90, 90),
            (60, 25),
            (10, 80),
        ];

        let mut input = Vec::new();
        let mut last_page_count = 1;

        for &size in &sizes {
            input.push(Item::new(size));

            let output = pack(&input, 100, 100).unwrap();
            assert_valid_layout(&input, &output);
            assert!(output.pages().len() >= last_page_count);

            last_page_count = output.pages().len();
        }
    }

    #[test]
    fn many_small_items() {
        let input: Vec<_> = (0..200)
            .map(|i| Item::new((1 + i % 7, 1 + (i * 3) % 11)))
            .collect();

        let output = pack(&input, 40, 30).unwrap();

        assert_eq!(output.placed_count(), input.len());
        assert_valid_layout(&input, &output);
        assert!(output.pages().iter().all(|page| !page.items().is_empty()));
    }
}
