use std::{
    fmt,
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

static LAST_ID: AtomicUsize = AtomicUsize::new(1);

/// Opaque identity of an [`Item`](crate::Item), unique for the lifetime of the
/// process. Placement results carry the ID of the item they were made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(NonZeroUsize);

impl Id {
    pub(crate) fn new() -> Self {
        let id = LAST_ID.fetch_add(1, Ordering::SeqCst);

        // The counter starts at 1 and would need to wrap all the way around
        // to produce zero.
        match NonZeroUsize::new(id) {
            Some(id) => Id(id),
            None => panic!("ran out of item IDs"),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}
