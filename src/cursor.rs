use serde::Deserialize;

/// A page of a cursored list endpoint: the pagination token pair plus the
/// page's item ids. The API marks the outermost pages with a cursor value of
/// zero, so an unset cursor never counts as a boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cursor {
    pub previous_cursor: Option<i64>,
    pub next_cursor: Option<i64>,
    #[serde(default)]
    pub ids: Vec<u64>,
}

impl Cursor {
    /// The ids carried by this page, in response order. Empty when the
    /// payload had no `ids` field.
    pub fn collection(&self) -> &[u64] {
        &self.ids
    }

    /// True iff the previous cursor is explicitly zero.
    pub fn is_first(&self) -> bool {
        self.previous_cursor == Some(0)
    }

    /// True iff the next cursor is explicitly zero.
    pub fn is_last(&self) -> bool {
        self.next_cursor == Some(0)
    }
}
