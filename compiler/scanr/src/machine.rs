//! The producer side of a scan: cursor plus token emitter.
//!
//! A [`Machine`] is what every state runs against. It dereferences to the
//! [`Cursor`], so states call the accept primitives directly
//! (`m.accept_run(DIGITS)`), and adds [`Machine::emit`] to hand the pending
//! text to the consumer.
//!
//! # Backpressure
//!
//! Items go out over a zero-capacity channel, so `emit` blocks until the
//! consumer has taken the item. At most one item is ever in flight. If the
//! consumer has gone away, `emit` fails fast instead: the machine records the
//! cancellation and the driver stops after the current state.

use std::ops::{Deref, DerefMut};

use crossbeam::channel::Sender;
use scanr_core::Cursor;

use crate::item::{Item, ItemKind};
use crate::state::State;

/// Cursor, emitter and home state for one run over one input.
pub struct Machine<'a> {
    cursor: Cursor<'a>,
    items: Sender<Item<'a>>,
    home: State,
    last_item: Option<Item<'a>>,
    emitted: usize,
    cancelled: bool,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(input: &'a str, items: Sender<Item<'a>>, home: State) -> Self {
        Self {
            cursor: Cursor::new(input),
            items,
            home,
            last_item: None,
            emitted: 0,
            cancelled: false,
        }
    }

    /// Emit the pending text as an item of `kind`.
    ///
    /// Blocks until the consumer receives the item. Returns `false` if the
    /// consumer is gone; the pending window is collapsed either way.
    pub fn emit(&mut self, kind: ItemKind) -> bool {
        let item = Item::new(kind, self.cursor.start(), self.cursor.pending());
        self.cursor.mark_emitted();
        if self.cancelled {
            return false;
        }
        if self.items.send(item).is_err() {
            tracing::debug!(pos = item.pos(), "consumer gone, cancelling scan");
            self.cancelled = true;
            return false;
        }
        tracing::trace!(kind = %kind, pos = item.pos(), len = item.len(), "emit");
        self.last_item = Some(item);
        self.emitted += 1;
        true
    }

    /// The state `Transition::Home` returns to.
    pub fn home(&self) -> &State {
        &self.home
    }

    /// The most recent item the consumer received.
    pub fn last_item(&self) -> Option<Item<'a>> {
        self.last_item
    }

    /// Number of items the consumer has received so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns `true` once an emission found the consumer gone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl<'a> Deref for Machine<'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Cursor<'a> {
        &self.cursor
    }
}

impl DerefMut for Machine<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}
