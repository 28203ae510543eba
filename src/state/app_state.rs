//! Application state and key action dispatch.
//!
//! AppState wraps the event list controller with the UI-only state the
//! shell needs (help overlay, table row highlight, selector options) and
//! turns key actions into controller events.

use crate::model::filter::{end_of_day, start_of_day};
use crate::model::selector::{cycle_selection, Cycle};
use crate::model::{FilterPatch, KeyAction, SelectorOption};
use crate::state::controller::{update, ControllerEvent, EventListState, FetchRequest, LoadingState};
use chrono::{Days, NaiveDate};

/// What the shell should do after handling a key action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing beyond a redraw.
    Redraw,
    /// Start this fetch.
    Fetch(FetchRequest),
    /// Leave the application.
    Quit,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    list: EventListState,
    locations: Vec<SelectorOption>,
    zones: Vec<SelectorOption>,

    /// Whether the help overlay is shown. While visible, only `Help` and
    /// `Quit` are handled.
    pub help_visible: bool,

    /// Highlighted row of the results table; `None` when there are no rows.
    pub selected_row: Option<usize>,
}

impl AppState {
    /// Create state around `list` with the selector option lists.
    pub fn new(
        list: EventListState,
        locations: Vec<SelectorOption>,
        zones: Vec<SelectorOption>,
    ) -> Self {
        Self {
            list,
            locations,
            zones,
            help_visible: false,
            selected_row: None,
        }
    }

    /// The event list controller state.
    pub fn list(&self) -> &EventListState {
        &self.list
    }

    /// Configured location options.
    pub fn locations(&self) -> &[SelectorOption] {
        &self.locations
    }

    /// Configured zone options.
    pub fn zones(&self) -> &[SelectorOption] {
        &self.zones
    }

    /// Feed one event to the controller.
    ///
    /// Returns the fetch the shell must start, if any.
    pub fn apply(&mut self, event: ControllerEvent) -> Option<FetchRequest> {
        let (list, request) = update(self.list.clone(), event);
        self.list = list;
        self.sync_selection();
        request
    }

    /// Handle a key action. `today` anchors the date range reset.
    pub fn handle_action(&mut self, action: KeyAction, today: NaiveDate) -> ActionOutcome {
        if self.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return ActionOutcome::Redraw;
        }

        let event = match action {
            KeyAction::Quit => return ActionOutcome::Quit,
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                return ActionOutcome::Redraw;
            }
            KeyAction::SelectNextRow => {
                self.move_selection(1);
                return ActionOutcome::Redraw;
            }
            KeyAction::SelectPrevRow => {
                self.move_selection(-1);
                return ActionOutcome::Redraw;
            }
            KeyAction::FirstPage
            | KeyAction::PrevPage
            | KeyAction::NextPage
            | KeyAction::LastPage => match action.page_navigation() {
                Some(nav) => ControllerEvent::Navigate(nav),
                None => return ActionOutcome::Redraw,
            },
            KeyAction::Refresh => ControllerEvent::Refresh,
            KeyAction::ShiftRangeBack
            | KeyAction::ShiftRangeForward
            | KeyAction::ExtendRange
            | KeyAction::ShrinkRange
            | KeyAction::ResetRange => match self.date_patch(action, today) {
                Some(patch) => ControllerEvent::FilterPatch(patch),
                None => return ActionOutcome::Redraw,
            },
            KeyAction::NextLocation => self.location_event(Cycle::Forward),
            KeyAction::PrevLocation => self.location_event(Cycle::Backward),
            KeyAction::NextZone => self.zone_event(Cycle::Forward),
            KeyAction::PrevZone => self.zone_event(Cycle::Backward),
            KeyAction::ClearSelectors => {
                ControllerEvent::FilterPatch(FilterPatch::location(None).and(FilterPatch::zone(None)))
            }
        };

        match self.apply(event) {
            Some(request) => ActionOutcome::Fetch(request),
            None => ActionOutcome::Redraw,
        }
    }

    fn location_event(&self, direction: Cycle) -> ControllerEvent {
        let current = self.list.filters().location_id();
        let next = cycle_selection(&self.locations, current, direction);
        ControllerEvent::FilterPatch(FilterPatch::location(next))
    }

    fn zone_event(&self, direction: Cycle) -> ControllerEvent {
        let current = self.list.filters().zone_id();
        let next = cycle_selection(&self.zones, current, direction);
        ControllerEvent::FilterPatch(FilterPatch::zone(next))
    }

    /// Date range patch for a date action, or `None` when it cannot apply.
    fn date_patch(&self, action: KeyAction, today: NaiveDate) -> Option<FilterPatch> {
        let filters = self.list.filters();
        let (start, end) = (filters.start_date(), filters.end_date());
        let one_day = Days::new(1);

        let (start, end) = match action {
            KeyAction::ShiftRangeBack => (
                start.checked_sub_days(one_day)?,
                end.checked_sub_days(one_day)?,
            ),
            KeyAction::ShiftRangeForward => (
                start.checked_add_days(one_day)?,
                end.checked_add_days(one_day)?,
            ),
            KeyAction::ExtendRange => (start, end.checked_add_days(one_day)?),
            KeyAction::ShrinkRange => {
                let end = end.checked_sub_days(one_day)?;
                if end < start {
                    return None;
                }
                (start, end)
            }
            KeyAction::ResetRange => {
                let tomorrow = today.succ_opt().unwrap_or(today);
                (start_of_day(today), end_of_day(tomorrow))
            }
            _ => return None,
        };

        Some(FilterPatch::date_range(start, end))
    }

    fn result_count(&self) -> usize {
        match self.list.loading() {
            LoadingState::Loaded(page) => page.results.len(),
            _ => 0,
        }
    }

    /// Keep the row highlight inside the current results.
    fn sync_selection(&mut self) {
        let count = self.result_count();
        self.selected_row = match (count, self.selected_row) {
            (0, _) => None,
            (_, None) => Some(0),
            (count, Some(row)) => Some(row.min(count - 1)),
        };
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.result_count();
        if count == 0 {
            self.selected_row = None;
            return;
        }
        let current = self.selected_row.unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(count - 1);
        self.selected_row = Some(next);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
