//! Items: the typed, positioned slices handed to the consumer.

use std::fmt;
use std::ops::Range;

/// What an [`Item`] is.
///
/// `Error` and `EndOfInput` are sentinels; every other kind is produced by a
/// recognizer. Grammars with their own recognizers tag items with
/// [`ItemKind::Custom`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Malformed input. The item text is the offending token.
    Error,
    /// End of input. The item text is any still-pending text, usually empty.
    EndOfInput,
    /// A run of spaces (possibly empty).
    Space,
    /// `\n`, `\r` or `\r\n`.
    Newline,
    /// A dotted-quad address such as `192.168.0.1`.
    NumericAddress,
    /// A hostname or hostname label.
    Hostname,
    /// A kind defined by a grammar outside this crate.
    Custom(u16),
}

impl ItemKind {
    /// Returns `true` for the kinds that signal termination or failure.
    pub fn is_sentinel(self) -> bool {
        matches!(self, Self::Error | Self::EndOfInput)
    }

    /// Short lowercase name, used in logs and `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::EndOfInput => "eof",
            Self::Space => "space",
            Self::Newline => "newline",
            Self::NumericAddress => "ip",
            Self::Hostname => "hostname",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(tag) => write!(f, "custom({tag})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A typed slice of the input.
///
/// Items borrow the text they cover, so they cannot outlive the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item<'a> {
    kind: ItemKind,
    pos: usize,
    text: &'a str,
}

impl<'a> Item<'a> {
    /// Create an item starting at byte `pos`.
    pub fn new(kind: ItemKind, pos: usize, text: &'a str) -> Self {
        Self { kind, pos, text }
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Byte offset of the first byte of `text` in the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range covered in the input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.pos..self.pos + self.text.len()
    }

    /// Byte length of the covered text.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {:?}", self.kind, self.pos, self.text)
    }
}

/// An ordered run of items.
///
/// `Display` concatenates the item texts; for a complete scan this
/// reproduces the input exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Items<'a>(Vec<Item<'a>>);

impl<'a> Items<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, item: Item<'a>) {
        self.0.push(item);
    }

    pub fn as_slice(&self) -> &[Item<'a>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<'a>> {
        self.0.iter()
    }

    /// Kinds in emission order.
    pub fn kinds(&self) -> Vec<ItemKind> {
        self.0.iter().map(Item::kind).collect()
    }

    /// Returns `true` if any item is an [`ItemKind::Error`].
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|item| item.kind == ItemKind::Error)
    }

    pub fn into_vec(self) -> Vec<Item<'a>> {
        self.0
    }
}

impl fmt::Display for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|item| f.write_str(item.text))
    }
}

impl<'a> FromIterator<Item<'a>> for Items<'a> {
    fn from_iter<I: IntoIterator<Item = Item<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for Items<'a> {
    type Item = Item<'a>;
    type IntoIter = std::vec::IntoIter<Item<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'i, 'a> IntoIterator for &'i Items<'a> {
    type Item = &'i Item<'a>;
    type IntoIter = std::slice::Iter<'i, Item<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
