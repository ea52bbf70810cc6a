use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cursor::{Cursor, CursorValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Next,
    Prev,
}

/// A direction aware request for one page of cursor paginated results.
///
/// The limit is normalized on construction, so `MIN_LIMIT <= limit <=
/// MAX_LIMIT` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPageRequest<T> {
    cursor: Option<T>,
    limit: u64,
    direction: Option<Direction>,
}

impl<T> CursorPageRequest<T> {
    pub const MIN_LIMIT: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 1000;

    /// Creates a new request.
    ///
    /// An absent or non-positive `limit` is replaced by
    /// [`DEFAULT_LIMIT`](Self::DEFAULT_LIMIT); limits above
    /// [`MAX_LIMIT`](Self::MAX_LIMIT) are capped.
    pub fn new(cursor: Option<T>, limit: Option<i64>, direction: Option<Direction>) -> Self {
        let limit = match limit.and_then(|limit| u64::try_from(limit).ok()) {
            None | Some(0) => Self::DEFAULT_LIMIT,
            Some(limit) => limit.clamp(Self::MIN_LIMIT, Self::MAX_LIMIT),
        };

        Self {
            cursor,
            limit,
            direction,
        }
    }

    /// The exclusive resume point.
    pub fn cursor(&self) -> Option<&T> {
        self.cursor.as_ref()
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The number of records to fetch from the source: one more than
    /// [`limit`](Self::limit), so that the existence of further data can be
    /// detected without counting.
    pub fn query_limit(&self) -> u64 {
        self.limit + 1
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether the source should be read in ascending key order.
    ///
    /// Only an explicit [`Direction::Next`] is forward. A request without a
    /// direction is read like [`Direction::Prev`] (nearest to the cursor, or
    /// newest, first) but its page is neither reversed nor does it report
    /// `has_previous`.
    pub fn is_forward(&self) -> bool {
        self.direction == Some(Direction::Next)
    }
}

impl<T> Default for CursorPageRequest<T> {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// A request for one page of offset paginated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 100;

    /// Creates a new request. Negative offsets are raised to zero and the
    /// limit is clamped to `1..=MAX_LIMIT`.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        let offset = offset
            .and_then(|offset| u64::try_from(offset).ok())
            .unwrap_or(0);
        let limit = limit
            .map(|limit| limit.clamp(1, Self::MAX_LIMIT as i64) as u64)
            .unwrap_or(Self::DEFAULT_LIMIT);

        Self { offset, limit }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Items which can provide the cursor of their own position.
pub trait Cursored {
    type Key: CursorValue;

    fn cursor(&self) -> Cursor<Self::Key>;
}

/// Paging state of a [`CursorPage`] detached from its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPageInfo {
    pub direction: Option<Direction>,
    pub has_extra: bool,
}

/// One page of cursor paginated results.
///
/// Items are always presented in ascending key order, regardless of the
/// direction in which the page was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPage<T> {
    items: Vec<T>,
    info: CursorPageInfo,
}

impl<T> CursorPage<T> {
    /// Wraps already trimmed `items`. Prefer [`CursorPage::from_slice`] when
    /// starting from the raw result of an over-fetching read.
    pub fn new(items: Vec<T>, direction: Option<Direction>, has_extra: bool) -> Self {
        Self::from_parts(
            items,
            CursorPageInfo {
                direction,
                has_extra,
            },
        )
    }

    pub fn empty(direction: Option<Direction>) -> Self {
        Self::new(Vec::new(), direction, false)
    }

    pub fn from_parts(items: Vec<T>, info: CursorPageInfo) -> Self {
        Self { items, info }
    }

    /// Assembles a page from up to `request.query_limit()` records which
    /// were read in the order requested by `request`.
    ///
    /// The over-fetched probe record is dropped from the end, and pages read
    /// in [`Direction::Prev`] are reversed.
    pub fn from_slice<K>(mut raw: Vec<T>, request: &CursorPageRequest<K>) -> Self {
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let has_extra = raw.len() > limit;
        raw.truncate(limit);
        if request.direction() == Some(Direction::Prev) {
            raw.reverse();
        }
        Self::new(raw, request.direction(), has_extra)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<T>, CursorPageInfo) {
        (self.items, self.info)
    }

    pub fn info(&self) -> CursorPageInfo {
        self.info
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.info.direction
    }

    /// Whether the source returned more records than were requested.
    pub fn has_extra(&self) -> bool {
        self.info.has_extra
    }

    pub fn has_next(&self) -> bool {
        self.info.has_extra && self.info.direction == Some(Direction::Next)
    }

    pub fn has_previous(&self) -> bool {
        self.info.has_extra && self.info.direction == Some(Direction::Prev)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CursorPage<U> {
        CursorPage::from_parts(self.items.into_iter().map(f).collect(), self.info)
    }
}

impl<T: Cursored> CursorPage<T> {
    pub fn start_cursor(&self) -> Option<Cursor<T::Key>> {
        self.items.first().map(Cursored::cursor)
    }

    pub fn end_cursor(&self) -> Option<Cursor<T::Key>> {
        self.items.last().map(Cursored::cursor)
    }
}

/// One page of offset paginated results.
///
/// `total_count` is supplied by the caller and is not derived from `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
