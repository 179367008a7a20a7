use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use tracing::trace;

/// Source of "today" for anything that stamps a calendar date into a page.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the wall clock. Dates are UTC calendar dates.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shared handle to the clock stored in the reactive context.
#[derive(Clone)]
pub struct ClockContext(Arc<dyn Clock>);

impl ClockContext {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    pub fn today(&self) -> NaiveDate {
        self.0.today()
    }
}

/// Installs `clock` into context, replacing whatever was there for this owner.
pub fn provide_clock(clock: impl Clock + 'static) -> ClockContext {
    let context = ClockContext::new(clock);
    provide_context(context.clone());
    context
}

/// Provide the system clock if no clock has been provided yet, and return the active one.
pub fn provide_system_clock() -> ClockContext {
    if let Some(existing) = use_context::<ClockContext>() {
        return existing;
    }
    provide_clock(SystemClock)
}

/// Retrieve the clock from context, falling back to the system clock.
pub fn use_clock() -> ClockContext {
    use_context::<ClockContext>().unwrap_or_else(|| {
        trace!("no clock in context, using the system clock");
        ClockContext::new(SystemClock)
    })
}

/// `YYYY-MM-DD`
pub fn format_policy_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
