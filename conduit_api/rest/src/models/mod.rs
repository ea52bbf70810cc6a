use chrono::{DateTime, Utc};
use conduit_models::{
    cursor::{Cursor, CursorError},
    pagination::{CursorPage, CursorPageRequest, Cursored, Direction, Page, PageRequest},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod article;
pub mod comment;
pub mod profile;

/// Query parameters of cursor paginated endpoints.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ApiCursorQuery {
    /// A `start_cursor` or `end_cursor` returned by a previous request.
    pub cursor: Option<String>,
    /// The maximum number of items to return.
    pub limit: Option<i64>,
    /// `NEXT` returns the items after the cursor, `PREV` the items before
    /// it. Without a direction the newest items are returned first.
    pub direction: Option<Direction>,
}

impl ApiCursorQuery {
    pub fn into_request(self) -> Result<CursorPageRequest<DateTime<Utc>>, CursorError> {
        let cursor = Cursor::decode(self.cursor.as_deref())?;
        Ok(CursorPageRequest::new(cursor, self.limit, self.direction))
    }
}

/// Query parameters of offset paginated endpoints.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ApiPageQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl From<ApiPageQuery> for PageRequest {
    fn from(value: ApiPageQuery) -> Self {
        Self::new(value.offset, value.limit)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiCursorPage<T> {
    pub items: Vec<T>,
    /// Cursor of the first item, absent if the page is empty.
    pub start_cursor: Option<String>,
    /// Cursor of the last item, absent if the page is empty.
    pub end_cursor: Option<String>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> ApiCursorPage<T> {
    pub fn try_from_page<U: Cursored>(
        page: CursorPage<U>,
        f: impl FnMut(U) -> T,
    ) -> Result<Self, CursorError> {
        let start_cursor = page.start_cursor().map(|c| c.encode()).transpose()?;
        let end_cursor = page.end_cursor().map(|c| c.encode()).transpose()?;
        let has_next = page.has_next();
        let has_previous = page.has_previous();

        Ok(Self {
            items: page.into_items().into_iter().map(f).collect(),
            start_cursor,
            end_cursor,
            has_next,
            has_previous,
        })
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiPage<T> {
    pub items: Vec<T>,
    /// The total number of items matching the query.
    pub total_count: u64,
}

impl<T> ApiPage<T> {
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let page = page.map(f);
        Self {
            items: page.items,
            total_count: page.total_count,
        }
    }
}
