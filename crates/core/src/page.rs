// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::approval::apply_approved_requests;
use crate::clock::Clock;
use crate::cursor::{CursorCommand, MonthCursor};
use crate::error::CoreError;
use crate::grid::MonthGrid;
use crate::modal::ModalState;
use crate::query::EventQuery;
use crate::render::{DayCellRenderer, DisplayBudget};
use crate::repository::{CalendarRepository, LeaveRequestRepository};
use crate::store::EventStore;
use crate::table::LeaveRequestTable;
use leavecal_domain::{
    CATEGORY_STYLES, CalendarEvent, CategoryStyle, Holiday, LeaveApplication, LeaveBalance,
    LeaveRequest, upcoming_holidays,
};
use time::Date;
use tracing::{debug, info};

/// Everything one calendar page shows.
///
/// The page owns its event store, request table, and navigation state.
/// Nothing is shared between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    /// The calendar events.
    store: EventStore,
    /// The employee's leave requests.
    table: LeaveRequestTable,
    /// The holiday list.
    holidays: Vec<Holiday>,
    /// The remaining leave balance.
    balance: LeaveBalance,
    /// The selected day and displayed month.
    cursor: MonthCursor,
    /// The open dialog, if any.
    modal: ModalState,
    /// Day cell rendering budget.
    renderer: DayCellRenderer,
}

impl CalendarPage {
    /// Loads a page from `repository`, positioned on today.
    ///
    /// # Arguments
    ///
    /// * `repository` - Source of events, holidays, balance, and requests
    /// * `clock` - Supplies today's date
    /// * `budget` - Day cell rendering budget
    ///
    /// # Errors
    ///
    /// Returns an error if any of the data fails to load.
    pub fn load<R>(
        repository: &R,
        clock: &dyn Clock,
        budget: DisplayBudget,
    ) -> Result<Self, CoreError>
    where
        R: CalendarRepository + LeaveRequestRepository,
    {
        let store: EventStore = repository.load_events()?;
        let requests: Vec<LeaveRequest> = repository.load_requests()?;
        let holidays: Vec<Holiday> = repository.load_holidays()?;
        let balance: LeaveBalance = repository.load_balance()?;

        info!(
            events = store.len(),
            requests = requests.len(),
            holidays = holidays.len(),
            "Loaded calendar page"
        );

        Ok(Self {
            store,
            table: LeaveRequestTable::new(requests),
            holidays,
            balance,
            cursor: MonthCursor::new(clock),
            modal: ModalState::Closed,
            renderer: DayCellRenderer::new(budget),
        })
    }

    /// Returns a lookup over this page's events.
    #[must_use]
    pub const fn query(&self) -> EventQuery<'_> {
        EventQuery::new(&self.store)
    }

    /// Returns the events on `date`.
    #[must_use]
    pub fn events_on(&self, date: Date) -> &[CalendarEvent] {
        self.query().events_on(date)
    }

    /// Lays out the displayed month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn grid(&self, clock: &dyn Clock) -> Result<MonthGrid, CoreError> {
        MonthGrid::build(&self.cursor, self.query(), &self.renderer, clock.today())
    }

    /// Moves the cursor.
    pub fn apply(&mut self, command: CursorCommand, clock: &dyn Clock) {
        self.cursor.apply(command, clock);
    }

    /// Replaces the navigation state, e.g. to open a page on a given month.
    pub const fn set_cursor(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    /// Replaces the day cell budget, e.g. when the layout changes.
    pub const fn set_budget(&mut self, budget: DisplayBudget) {
        self.renderer = DayCellRenderer::new(budget);
    }

    /// Returns the navigation state.
    #[must_use]
    pub const fn cursor(&self) -> &MonthCursor {
        &self.cursor
    }

    /// Returns the event store.
    #[must_use]
    pub const fn store(&self) -> &EventStore {
        &self.store
    }

    /// Adds calendar events for every approved leave request in the table.
    ///
    /// Returns the number of events added. Calling this twice adds the
    /// events twice.
    pub fn show_approved_leave(&mut self) -> usize {
        apply_approved_requests(&mut self.store, self.table.requests())
    }

    /// Returns the leave request table.
    #[must_use]
    pub const fn table(&self) -> &LeaveRequestTable {
        &self.table
    }

    /// Returns the open dialog.
    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Returns the remaining leave balance.
    #[must_use]
    pub const fn balance(&self) -> LeaveBalance {
        self.balance
    }

    /// Returns every holiday.
    #[must_use]
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the color legend, in display order.
    #[must_use]
    pub const fn legend() -> &'static [CategoryStyle] {
        &CATEGORY_STYLES
    }

    /// Returns up to `limit` holidays on or after `from`.
    #[must_use]
    pub fn upcoming_holidays(&self, from: Date, limit: usize) -> Vec<&Holiday> {
        upcoming_holidays(&self.holidays, from, limit)
    }

    /// Opens the detail view of request `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RequestNotFound` if there is no such request.
    /// The open dialog is left unchanged in that case.
    pub fn see_more(&mut self, index: usize) -> Result<&LeaveRequest, CoreError> {
        let request: LeaveRequest = self.table.get(index)?.clone();
        debug!(index, "Opening leave request detail");
        self.modal.open_detail(request);
        self.table.get(index)
    }

    /// Opens the leave application form.
    pub fn open_apply_leave(&mut self) {
        self.modal.open_apply();
    }

    /// Closes the open dialog.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Submits a leave application as a new pending request.
    ///
    /// On success the dialog closes and the index of the new request is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the application is invalid. The dialog stays
    /// open in that case.
    pub fn submit(&mut self, application: LeaveApplication) -> Result<usize, CoreError> {
        let request: LeaveRequest = application.into_request()?;
        let index: usize = self.table.push(request);
        self.modal.close();

        info!(index, "Submitted leave application");
        Ok(index)
    }
}
