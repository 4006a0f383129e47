//! Date selector state: month grid math, bounds, and the single/range
//! selection machine behind the date picker popover.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// en-US short date, e.g. "Jan 5, 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// en-US long date, e.g. "January 5, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// A calendar month being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Blank cells before day 1 in a Sunday-first week
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    /// The 7-column grid: `None` for the leading blanks, then every day
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let mut cells: Vec<Option<NaiveDate>> =
            std::iter::repeat(None).take(self.leading_blanks() as usize).collect();
        cells.extend(self.days().map(Some));
        cells
    }

    /// "January 2025"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// Inclusive selectable window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Strictly before `min` or strictly after `max`
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// Two-endpoint selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(Some(day), Some(day))
    }

    pub fn is_complete(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start <= end)
    }

    /// Start chosen, waiting for the second click
    pub fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Whether `date` is highlighted as part of the selection
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date == start,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Single,
    Range,
}

impl SelectionMode {
    pub fn default_placeholder(self) -> &'static str {
        match self {
            SelectionMode::Single => "Select date",
            SelectionMode::Range => "Select date range",
        }
    }
}

/// A change the picker reports to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    DateChanged(NaiveDate),
    RangeChanged(DateRange),
}

/// Everything a mounted date picker remembers between renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    mode: SelectionMode,
    bounds: DateBounds,
    open: bool,
    view: MonthView,
    selected: Option<NaiveDate>,
    range: DateRange,
    hover: Option<NaiveDate>,
}

impl DatePickerState {
    /// Closed picker showing the month of `today`
    pub fn new(mode: SelectionMode, bounds: DateBounds, today: NaiveDate) -> Self {
        Self {
            mode,
            bounds,
            open: false,
            view: MonthView::containing(today),
            selected: None,
            range: DateRange::default(),
            hover: None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: DateBounds) {
        self.bounds = bounds;
    }

    /// Controlled single value pushed down by the owner. `None` leaves the
    /// current selection alone.
    pub fn sync_value(&mut self, value: Option<NaiveDate>) {
        if let Some(value) = value {
            self.selected = Some(value);
        }
    }

    /// Controlled range pushed down by the owner
    pub fn sync_range(&mut self, range: Option<DateRange>) {
        if let Some(range) = range {
            self.range = range;
        }
    }

    /// Trigger activation
    pub fn toggle(&mut self, disabled: bool) {
        if disabled {
            return;
        }
        self.open = !self.open;
    }

    /// Click landed on the backdrop outside the popover
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn previous_month(&mut self) {
        self.view = self.view.previous();
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.bounds.is_disabled(day)
    }

    /// Click on a grid day. Disabled days are ignored.
    pub fn click_day(&mut self, day: NaiveDate) -> Option<PickerEvent> {
        if self.is_disabled(day) {
            return None;
        }

        match self.mode {
            SelectionMode::Single => {
                self.selected = Some(day);
                self.open = false;
                Some(PickerEvent::DateChanged(day))
            }
            SelectionMode::Range => match self.range.start {
                Some(start) if self.range.end.is_none() => {
                    self.range = if day >= start {
                        DateRange::new(Some(start), Some(day))
                    } else {
                        DateRange::new(Some(day), Some(start))
                    };
                    self.open = false;
                    log::debug!("date range completed: {:?}", self.range);
                    Some(PickerEvent::RangeChanged(self.range))
                }
                _ => {
                    self.range = DateRange::new(Some(day), None);
                    Some(PickerEvent::RangeChanged(self.range))
                }
            },
        }
    }

    /// Pointer entered a grid day. Only tracked in range mode; never
    /// reported to the owner.
    pub fn hover_day(&mut self, day: NaiveDate) {
        if self.mode == SelectionMode::Range {
            self.hover = Some(day);
        }
    }

    /// The "Today" shortcut. Range mode selects a same-day range.
    pub fn select_today(&mut self, today: NaiveDate) -> PickerEvent {
        self.open = false;
        match self.mode {
            SelectionMode::Single => {
                self.selected = Some(today);
                PickerEvent::DateChanged(today)
            }
            SelectionMode::Range => {
                self.range = DateRange::single_day(today);
                PickerEvent::RangeChanged(self.range)
            }
        }
    }

    pub fn is_selected(&self, day: NaiveDate) -> bool {
        match self.mode {
            SelectionMode::Single => self.selected == Some(day),
            SelectionMode::Range => self.range.contains(day),
        }
    }

    /// Whether `day` falls inside the hover preview of a pending range
    pub fn in_preview(&self, day: NaiveDate) -> bool {
        if self.mode != SelectionMode::Range || !self.range.is_pending() {
            return false;
        }
        match (self.range.start, self.hover) {
            (Some(start), Some(hover)) => {
                let (low, high) = if start <= hover { (start, hover) } else { (hover, start) };
                day >= low && day <= high
            }
            _ => false,
        }
    }

    pub fn has_value(&self) -> bool {
        match self.mode {
            SelectionMode::Single => self.selected.is_some(),
            SelectionMode::Range => self.range.start.is_some(),
        }
    }

    /// Text on the trigger button
    pub fn display_text(&self, placeholder: &str) -> String {
        match self.mode {
            SelectionMode::Single => self
                .selected
                .map(format_short_date)
                .unwrap_or_else(|| placeholder.to_string()),
            SelectionMode::Range => match (self.range.start, self.range.end) {
                (Some(start), Some(end)) => {
                    format!("{} - {}", format_short_date(start), format_short_date(end))
                }
                (Some(start), None) => format_short_date(start),
                _ => placeholder.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range_picker(today: NaiveDate) -> DatePickerState {
        let mut picker = DatePickerState::new(SelectionMode::Range, DateBounds::default(), today);
        picker.toggle(false);
        picker
    }

    #[test]
    fn test_month_grid_math() {
        // June 2025 starts on a Sunday
        let june = MonthView::containing(date(2025, 6, 18));
        assert_eq!(june.days_in_month(), 30);
        assert_eq!(june.leading_blanks(), 0);

        // February 2024 is a leap month starting on Thursday
        let feb = MonthView::containing(date(2024, 2, 10));
        assert_eq!(feb.days_in_month(), 29);
        assert_eq!(feb.leading_blanks(), 4);
        let cells = feb.cells();
        assert_eq!(cells.len(), 33);
        assert!(cells[..4].iter().all(Option::is_none));
        assert_eq!(cells[4], Some(date(2024, 2, 1)));
        assert_eq!(cells.last().copied().flatten(), Some(date(2024, 2, 29)));

        assert_eq!(MonthView::containing(date(2023, 2, 1)).days_in_month(), 28);
        assert_eq!(feb.title(), "February 2024");
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let jan = MonthView::containing(date(2025, 1, 31));
        let dec = jan.previous();
        assert_eq!((dec.year(), dec.month()), (2024, 12));
        assert_eq!(dec.next(), jan);
        let next = MonthView::containing(date(2024, 12, 5)).next();
        assert_eq!((next.year(), next.month()), (2025, 1));
    }

    #[test]
    fn test_single_pick_closes() {
        let today = date(2025, 1, 15);
        let mut picker = DatePickerState::new(SelectionMode::Single, DateBounds::default(), today);
        picker.toggle(false);
        assert!(picker.is_open());

        let event = picker.click_day(date(2025, 1, 20));
        assert_eq!(event, Some(PickerEvent::DateChanged(date(2025, 1, 20))));
        assert!(!picker.is_open());
        assert_eq!(picker.display_text("Select date"), "Jan 20, 2025");
    }

    #[test]
    fn test_range_pick_reversed_clicks() {
        let mut picker = range_picker(date(2025, 1, 1));

        let first = picker.click_day(date(2025, 1, 10));
        assert_eq!(
            first,
            Some(PickerEvent::RangeChanged(DateRange::new(Some(date(2025, 1, 10)), None)))
        );
        assert!(picker.is_open());
        assert_eq!(picker.display_text("Select date range"), "Jan 10, 2025");

        picker.click_day(date(2025, 1, 5));
        assert_eq!(
            picker.range(),
            DateRange::new(Some(date(2025, 1, 5)), Some(date(2025, 1, 10)))
        );
        assert!(!picker.is_open());
        assert_eq!(
            picker.display_text("Select date range"),
            "Jan 5, 2025 - Jan 10, 2025"
        );
    }

    #[test]
    fn test_range_always_ordered() {
        let base = date(2025, 3, 1);
        for a in 0..10 {
            for b in 0..10 {
                let mut picker = range_picker(base);
                picker.click_day(base + Duration::days(a));
                picker.click_day(base + Duration::days(b));
                let range = picker.range();
                assert!(range.is_complete(), "a={} b={}", a, b);
                assert!(range.start <= range.end);
            }
        }
    }

    #[test]
    fn test_new_range_discards_complete_one() {
        let mut picker = range_picker(date(2025, 1, 1));
        picker.click_day(date(2025, 1, 3));
        picker.click_day(date(2025, 1, 8));
        assert!(picker.range().is_complete());

        picker.toggle(false);
        picker.click_day(date(2025, 1, 20));
        assert_eq!(picker.range(), DateRange::new(Some(date(2025, 1, 20)), None));
        assert!(!picker.is_selected(date(2025, 1, 5)));
    }

    #[test]
    fn test_out_of_bounds_click_is_rejected() {
        let today = date(2025, 6, 15);
        let bounds = DateBounds::new(Some(today - Duration::days(30)), Some(today));

        let mut single = DatePickerState::new(SelectionMode::Single, bounds, today);
        single.toggle(false);
        assert_eq!(single.click_day(today + Duration::days(1)), None);
        assert_eq!(single.selected(), None);
        assert!(single.is_open());

        let mut range = DatePickerState::new(SelectionMode::Range, bounds, today);
        range.click_day(today - Duration::days(5));
        let before = range.range();
        assert_eq!(range.click_day(today - Duration::days(31)), None);
        assert_eq!(range.range(), before);

        // Bounds are inclusive
        assert!(!single.is_disabled(today));
        assert!(!single.is_disabled(today - Duration::days(30)));
    }

    #[test]
    fn test_today_shortcut() {
        let today = date(2025, 2, 14);
        let mut picker = range_picker(today);
        picker.click_day(date(2025, 2, 1));

        let event = picker.select_today(today);
        assert_eq!(event, PickerEvent::RangeChanged(DateRange::single_day(today)));
        assert_eq!(picker.range().start, picker.range().end);
        assert!(!picker.is_open());

        let mut single = DatePickerState::new(SelectionMode::Single, DateBounds::default(), today);
        single.toggle(false);
        assert_eq!(single.select_today(today), PickerEvent::DateChanged(today));
        assert!(!single.is_open());
    }

    #[test]
    fn test_hover_preview_only_while_pending() {
        let mut picker = range_picker(date(2025, 4, 1));
        picker.hover_day(date(2025, 4, 9));
        assert!(!picker.in_preview(date(2025, 4, 5)));

        picker.click_day(date(2025, 4, 10));
        picker.hover_day(date(2025, 4, 6));
        assert!(picker.in_preview(date(2025, 4, 6)));
        assert!(picker.in_preview(date(2025, 4, 8)));
        assert!(picker.in_preview(date(2025, 4, 10)));
        assert!(!picker.in_preview(date(2025, 4, 11)));

        picker.click_day(date(2025, 4, 12));
        assert!(!picker.in_preview(date(2025, 4, 8)));
    }

    #[test]
    fn test_hover_ignored_in_single_mode() {
        let mut picker =
            DatePickerState::new(SelectionMode::Single, DateBounds::default(), date(2025, 4, 1));
        picker.hover_day(date(2025, 4, 3));
        assert_eq!(picker.hover(), None);
    }

    #[test]
    fn test_disabled_trigger_and_backdrop() {
        let mut picker =
            DatePickerState::new(SelectionMode::Single, DateBounds::default(), date(2025, 4, 1));
        picker.toggle(true);
        assert!(!picker.is_open());
        picker.toggle(false);
        picker.dismiss();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_controlled_values() {
        let mut picker =
            DatePickerState::new(SelectionMode::Single, DateBounds::default(), date(2025, 4, 1));
        assert_eq!(picker.display_text("Pick one"), "Pick one");
        picker.sync_value(Some(date(2025, 4, 2)));
        picker.sync_value(None);
        assert_eq!(picker.selected(), Some(date(2025, 4, 2)));

        let mut range =
            DatePickerState::new(SelectionMode::Range, DateBounds::default(), date(2025, 4, 1));
        range.sync_range(Some(DateRange::single_day(date(2025, 4, 9))));
        assert!(range.is_selected(date(2025, 4, 9)));
        assert!(range.has_value());
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_short_date(date(2025, 1, 5)), "Jan 5, 2025");
        assert_eq!(format_long_date(date(2025, 11, 28)), "November 28, 2025");
    }
}
