//! The consumer side of a scan.

use crossbeam::channel::Receiver;

use crate::item::Item;

/// Blocking stream of items from a running scan.
///
/// Handed to the consumer closure of [`Scanner::run`](crate::Scanner::run).
/// The stream cannot escape that closure; when the closure returns, the
/// stream is dropped and a producer that is still running is cancelled at
/// its next emission.
pub struct ItemStream<'a> {
    items: Receiver<Item<'a>>,
    last_pos: Option<usize>,
}

impl<'a> ItemStream<'a> {
    pub(crate) fn new(items: Receiver<Item<'a>>) -> Self {
        Self {
            items,
            last_pos: None,
        }
    }

    /// Block until the producer emits the next item.
    ///
    /// Returns `None` once the producer has terminated.
    pub fn next_item(&mut self) -> Option<Item<'a>> {
        let item = self.items.recv().ok()?;
        self.last_pos = Some(item.pos());
        Some(item)
    }

    /// Discard every remaining item, letting the producer run to completion.
    ///
    /// Returns the number of items discarded.
    pub fn drain(&mut self) -> usize {
        let drained = self.items.iter().count();
        tracing::debug!(drained, "drained item stream");
        drained
    }

    /// Position of the last item received through [`next_item`](Self::next_item).
    pub fn last_pos(&self) -> Option<usize> {
        self.last_pos
    }
}

impl<'a> Iterator for ItemStream<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        self.next_item()
    }
}
