//! Pagination and sorting contract for the data table.
//!
//! The table component renders whatever this module decides: which rows
//! land on the current page, which page buttons appear, and how a header
//! click changes the sort. Nothing in here knows about HTML.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use url::form_urlencoded;

/// Rows per page when the caller does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Numeric page buttons shown at once in the pagination strip
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Query parameter carrying the page number in externally paginated URLs
pub const PAGE_QUERY_PARAM: &str = "page";

/// A single cell as seen by the sort comparator and the default renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Field missing on this row
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Native ordering of two cells.
    ///
    /// Values of the same kind compare naturally. Values that cannot be
    /// compared (different kinds, missing fields, NaN) are treated as equal,
    /// which leaves their relative order untouched under a stable sort.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// A row the table can display and sort.
///
/// Rows are looked up by field name; a field that does not exist on the row
/// must come back as [`CellValue::Empty`] rather than failing.
pub trait Record {
    fn field(&self, key: &str) -> CellValue;
}

impl Record for serde_json::Value {
    fn field(&self, key: &str) -> CellValue {
        match self.get(key) {
            Some(serde_json::Value::String(text)) => CellValue::Text(text.clone()),
            Some(serde_json::Value::Number(number)) => {
                number.as_f64().map(CellValue::Number).unwrap_or(CellValue::Empty)
            }
            Some(serde_json::Value::Bool(flag)) => CellValue::Bool(*flag),
            Some(serde_json::Value::Null) | None => CellValue::Empty,
            Some(other) => CellValue::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The single active sort column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Sort that results from clicking the header of `key`.
///
/// A new column always starts ascending; the active column flips. There is
/// no third "unsorted" state.
pub fn next_sort(current: Option<&SortState>, key: &str) -> SortState {
    match current {
        Some(active) if active.key == key => SortState {
            key: key.to_string(),
            direction: active.direction.toggled(),
        },
        _ => SortState::ascending(key),
    }
}

/// Rows ordered by `sort`, keeping the input order among equal keys
pub fn sort_rows<'a, R: Record>(rows: &'a [R], sort: &SortState) -> Vec<&'a R> {
    let mut sorted: Vec<&R> = rows.iter().collect();
    // `sort_by` is a stable merge sort
    sorted.sort_by(|a, b| {
        let ordering = a.field(&sort.key).compare(&b.field(&sort.key));
        sort.direction.apply(ordering)
    });
    sorted
}

/// `ceil(total_items / page_size)`; a zero page size has no pages
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The window `[page_size * (page - 1), page_size * page)` clipped to `items`
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Whether a page request lands on an existing page
pub fn is_valid_page(page: usize, total_pages: usize) -> bool {
    page >= 1 && page <= total_pages
}

/// Pagination metadata supplied by a caller that paginates upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalPage {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Who owns paging and sorting for a mounted table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// The table sorts and slices the full collection itself
    SelfManaged,
    /// The caller hands over one page that is already sorted
    External(ExternalPage),
}

impl PaginationMode {
    pub fn is_self_managed(&self) -> bool {
        matches!(self, PaginationMode::SelfManaged)
    }

    /// Header sorting is only offered when the table owns the data
    pub fn allows_sorting(&self) -> bool {
        self.is_self_managed()
    }
}

/// Page and sort state owned by a self-managed table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    page: usize,
    sort: Option<SortState>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self { page: 1, sort: None }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Apply a header click. Returns true when the sort changed.
    pub fn click_header(&mut self, mode: &PaginationMode, key: &str, sortable: bool) -> bool {
        if !mode.allows_sorting() || !sortable {
            return false;
        }
        let sort = next_sort(self.sort.as_ref(), key);
        log::debug!("table sort -> {} {:?}", sort.key, sort.direction);
        self.sort = Some(sort);
        true
    }

    /// Move to `page` if it exists. Returns true when the page changed.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if !is_valid_page(page, total_pages) {
            return false;
        }
        self.page = page;
        true
    }

    /// Pull the stored page back inside `1..=total_pages`. Returns true
    /// when it moved.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.min(total_pages).max(1);
        if clamped == self.page {
            return false;
        }
        self.page = clamped;
        true
    }
}

/// What one render of the table shows
#[derive(Debug, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, R: Record> TableView<'a, R> {
    /// Resolve the rows and pagination metadata for the current render.
    ///
    /// External mode passes `rows` through untouched. Self-managed mode
    /// sorts the whole collection and then cuts out the current page when
    /// pagination is on.
    pub fn build(
        rows: &'a [R],
        mode: &PaginationMode,
        state: &TableState,
        page_size: usize,
        show_pagination: bool,
    ) -> Self {
        let page_size = page_size.max(1);
        match mode {
            PaginationMode::External(external) => TableView {
                rows: rows.iter().collect(),
                current_page: external.current_page.max(1),
                total_pages: external.total_pages.max(1),
                total_items: if external.total_items == 0 {
                    rows.len()
                } else {
                    external.total_items
                },
            },
            PaginationMode::SelfManaged => {
                let sorted = match state.sort() {
                    Some(sort) => sort_rows(rows, sort),
                    None => rows.iter().collect(),
                };
                let pages = total_pages(rows.len(), page_size);
                // The owner may have shrunk `rows` under the stored page
                let current_page = state.page().min(pages).max(1);
                let visible = if show_pagination {
                    page_slice(&sorted, current_page, page_size).to_vec()
                } else {
                    sorted
                };
                TableView {
                    rows: visible,
                    current_page,
                    total_pages: pages,
                    total_items: rows.len(),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Layout of the numeric page buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub current: usize,
    pub total: usize,
    /// Consecutive numeric buttons around the current page
    pub pages: Vec<usize>,
    /// A standalone "1" button before the window
    pub show_first: bool,
    pub leading_ellipsis: bool,
    /// A standalone last-page button after the window
    pub show_last: bool,
    pub trailing_ellipsis: bool,
}

impl PageStrip {
    /// Strip for `current` out of `total` pages, or `None` when there is
    /// nothing to paginate.
    pub fn build(current: usize, total: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let current = current.clamp(1, total);
        let half = MAX_VISIBLE_PAGES / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = total.min(start + MAX_VISIBLE_PAGES - 1);
        if end - start < MAX_VISIBLE_PAGES - 1 {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }

        Some(PageStrip {
            current,
            total,
            pages: (start..=end).collect(),
            show_first: start > 1,
            leading_ellipsis: start > 2,
            show_last: end < total,
            trailing_ellipsis: end + 1 < total,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// The "Showing X to Y of Z results" line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl ResultsSummary {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let offset = current_page.saturating_sub(1).saturating_mul(page_size);
        Self {
            first: (offset + 1).min(total_items),
            last: current_page.saturating_mul(page_size).min(total_items),
            total: total_items,
        }
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}

/// Link to `page` on the current path, keeping every other query parameter.
///
/// The first existing `page` parameter is replaced in place and any
/// duplicates are dropped; when there is none it is appended.
pub fn page_href(path: &str, query: &str, page: usize) -> String {
    let query = query.trim_start_matches('?');
    let page_value = page.to_string();
    let mut replaced = false;
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == PAGE_QUERY_PARAM {
            if !replaced {
                serializer.append_pair(PAGE_QUERY_PARAM, &page_value);
                replaced = true;
            }
        } else {
            serializer.append_pair(&key, &value);
        }
    }
    if !replaced {
        serializer.append_pair(PAGE_QUERY_PARAM, &page_value);
    }

    format!("{}?{}", path, serializer.finish())
}

/// Page number carried by a query string, defaulting to the first page
pub fn page_from_query(query: &str) -> usize {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == PAGE_QUERY_PARAM)
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        group: &'static str,
    }

    impl Record for Row {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "group" => self.group.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|id| Row {
                id,
                group: if id % 2 == 0 { "even" } else { "odd" },
            })
            .collect()
    }

    fn ids(view: &TableView<'_, Row>) -> Vec<u32> {
        view.rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        for page_size in 1..=12usize {
            for count in 0..=30u32 {
                let data = rows(count);
                let pages = total_pages(data.len(), page_size);
                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    rebuilt.extend_from_slice(page_slice(&data, page, page_size));
                }
                assert_eq!(rebuilt, data, "page_size={} count={}", page_size, count);
            }
        }
    }

    #[test]
    fn test_self_managed_25_rows() {
        let data = rows(25);
        let mut state = TableState::new();
        let mode = PaginationMode::SelfManaged;

        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view), (1..=10).collect::<Vec<_>>());

        assert!(state.go_to(3, view.total_pages));
        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(ids(&view), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_shrinking_rows_pulls_page_back() {
        let mut data = rows(25);
        let mut state = TableState::new();
        let mode = PaginationMode::SelfManaged;
        assert!(state.go_to(3, 3));

        data.truncate(20);
        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(ids(&view), (11..=20).collect::<Vec<_>>());
        assert_eq!(
            ResultsSummary::new(view.current_page, 10, view.total_items).to_string(),
            "Showing 11 to 20 of 20 results"
        );

        let strip = PageStrip::build(state.page(), view.total_pages).unwrap();
        assert_eq!(strip.current, 2);
        assert!(!strip.has_next());
        assert!(strip.has_previous());

        assert!(state.clamp_page(view.total_pages));
        assert_eq!(state.page(), 2);
        assert!(!state.clamp_page(view.total_pages));

        data.clear();
        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(view.current_page, 1);
        assert!(view.is_empty());
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut state = TableState::new();
        assert!(!state.go_to(0, 3));
        assert!(!state.go_to(4, 3));
        assert_eq!(state.page(), 1);
        assert!(state.go_to(2, 3));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_without_pagination_shows_everything() {
        let data = rows(25);
        let state = TableState::new();
        let view = TableView::build(&data, &PaginationMode::SelfManaged, &state, 10, false);
        assert_eq!(view.rows.len(), 25);
    }

    #[test]
    fn test_sort_toggle_round_trip() {
        let mode = PaginationMode::SelfManaged;
        let mut state = TableState::new();

        assert!(state.click_header(&mode, "id", true));
        assert_eq!(state.sort(), Some(&SortState::ascending("id")));

        state.click_header(&mode, "id", true);
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));

        state.click_header(&mode, "id", true);
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Ascending));

        // Switching columns always restarts ascending
        state.click_header(&mode, "id", true);
        state.click_header(&mode, "group", true);
        assert_eq!(state.sort(), Some(&SortState::ascending("group")));
    }

    #[test]
    fn test_non_sortable_and_external_headers_do_nothing() {
        let mut state = TableState::new();
        assert!(!state.click_header(&PaginationMode::SelfManaged, "id", false));

        let external = PaginationMode::External(ExternalPage {
            current_page: 1,
            total_pages: 2,
            total_items: 20,
        });
        assert!(!state.click_header(&external, "id", true));
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = rows(9);
        let sort = SortState::ascending("group");
        let sorted: Vec<u32> = sort_rows(&data, &sort).iter().map(|r| r.id).collect();
        // "even" < "odd"; ids keep their original order inside each group
        assert_eq!(sorted, vec![2, 4, 6, 8, 1, 3, 5, 7, 9]);

        let sort = SortState {
            key: "group".to_string(),
            direction: SortDirection::Descending,
        };
        let sorted: Vec<u32> = sort_rows(&data, &sort).iter().map(|r| r.id).collect();
        assert_eq!(sorted, vec![1, 3, 5, 7, 9, 2, 4, 6, 8]);
    }

    #[test]
    fn test_sorted_pages_cover_sorted_collection() {
        let data = rows(23);
        let mode = PaginationMode::SelfManaged;
        let mut state = TableState::new();
        state.click_header(&mode, "id", true);
        state.click_header(&mode, "id", true);

        let mut seen = Vec::new();
        for page in 1..=3 {
            state.go_to(page, 3);
            let view = TableView::build(&data, &mode, &state, 10, true);
            seen.extend(ids(&view));
        }
        assert_eq!(seen, (1..=23).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_heterogeneous_json_rows() {
        let data = vec![
            json!({"name": "b", "age": 30}),
            json!({"name": "a"}),
            json!({"age": 20}),
            json!({"name": "c", "age": "unknown"}),
        ];
        let mode = PaginationMode::SelfManaged;
        let mut state = TableState::new();
        state.click_header(&mode, "age", true);

        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(view.rows.len(), 4);
        assert_eq!(data[1].field("age"), CellValue::Empty);
        assert_eq!(data[0].field("age").to_string(), "30");
    }

    #[test]
    fn test_external_mode_passes_rows_through() {
        let data = rows(10);
        let mode = PaginationMode::External(ExternalPage {
            current_page: 2,
            total_pages: 5,
            total_items: 47,
        });
        let mut state = TableState::new();
        state.click_header(&PaginationMode::SelfManaged, "id", true);
        state.click_header(&PaginationMode::SelfManaged, "id", true);

        let view = TableView::build(&data, &mode, &state, 10, true);
        assert_eq!(ids(&view), (1..=10).collect::<Vec<_>>());
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 5);
        assert_eq!(view.total_items, 47);

        let summary = ResultsSummary::new(view.current_page, 10, view.total_items);
        assert_eq!(summary.to_string(), "Showing 11 to 20 of 47 results");

        let strip = PageStrip::build(view.current_page, view.total_pages).unwrap();
        assert!(strip.has_previous());
        assert!(strip.has_next());
    }

    #[test]
    fn test_results_summary_last_page() {
        assert_eq!(
            ResultsSummary::new(3, 10, 25).to_string(),
            "Showing 21 to 25 of 25 results"
        );
        assert_eq!(ResultsSummary::new(1, 10, 0).to_string(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn test_page_strip_windows() {
        assert_eq!(PageStrip::build(1, 1), None);

        let strip = PageStrip::build(1, 3).unwrap();
        assert_eq!(strip.pages, vec![1, 2, 3]);
        assert!(!strip.show_first && !strip.show_last);
        assert!(!strip.has_previous());

        let strip = PageStrip::build(1, 10).unwrap();
        assert_eq!(strip.pages, vec![1, 2, 3, 4, 5]);
        assert!(strip.show_last && strip.trailing_ellipsis);

        let strip = PageStrip::build(6, 10).unwrap();
        assert_eq!(strip.pages, vec![4, 5, 6, 7, 8]);
        assert!(strip.show_first && strip.leading_ellipsis);
        assert!(strip.show_last && strip.trailing_ellipsis);

        let strip = PageStrip::build(10, 10).unwrap();
        assert_eq!(strip.pages, vec![6, 7, 8, 9, 10]);
        assert!(strip.show_first && strip.leading_ellipsis);
        assert!(!strip.show_last && !strip.has_next());

        // Window touching page 2 shows "1" without an ellipsis
        let strip = PageStrip::build(4, 6).unwrap();
        assert_eq!(strip.pages, vec![2, 3, 4, 5, 6]);
        assert!(strip.show_first && !strip.leading_ellipsis);

        let strip = PageStrip::build(3, 6).unwrap();
        assert_eq!(strip.pages, vec![1, 2, 3, 4, 5]);
        assert!(strip.show_last && !strip.trailing_ellipsis);
    }

    #[test]
    fn test_page_href_keeps_other_params() {
        assert_eq!(page_href("/admin/reports", "", 2), "/admin/reports?page=2");
        assert_eq!(
            page_href("/admin/reports", "?page=1&status=Pending", 3),
            "/admin/reports?page=3&status=Pending"
        );
        assert_eq!(
            page_href("/admin/reports", "q=a+b&page=4&page=9", 1),
            "/admin/reports?q=a+b&page=1"
        );
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query(""), 1);
        assert_eq!(page_from_query("?page=3"), 3);
        assert_eq!(page_from_query("status=x&page=2"), 2);
        assert_eq!(page_from_query("page=0"), 1);
        assert_eq!(page_from_query("page=abc"), 1);
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(15.99).to_string(), "15.99");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(Some("x")).to_string(), "x");
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
    }
}
