// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};
use tracing::warn;

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// The system clock, reporting the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        match OffsetDateTime::now_local() {
            Ok(now) => now.date(),
            Err(err) => {
                warn!("Local offset unavailable ({err}), using UTC date");
                OffsetDateTime::now_utc().date()
            }
        }
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
