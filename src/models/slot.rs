//! Hour-granular appointment slot.
//!
//! The engine treats slots as opaque ordered values; `HourSlot` is the
//! concrete slot used for hourly appointment booking.
//!
//! # Time Model
//! All times are in milliseconds relative to the Unix epoch. A slot is
//! identified by the start of its hour, so any two instants inside the
//! same hour produce equal slots.

use serde::{Deserialize, Serialize};

/// Length of one slot (ms).
pub const HOUR_MS: i64 = 60 * 60 * 1000;

/// First hour start representable in `i64` ms.
const MIN_START_MS: i64 = i64::MIN + (HOUR_MS - i64::MIN.rem_euclid(HOUR_MS)) % HOUR_MS;

/// Last hour start whose exclusive end still fits in `i64` ms.
const MAX_START_MS: i64 = (i64::MAX - HOUR_MS) - (i64::MAX - HOUR_MS).rem_euclid(HOUR_MS);

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }
}

/// One bookable hour.
///
/// Equality, ordering and hashing use the canonical hour start, never
/// the instant the slot was created from.
///
/// Slots range from [`HourSlot::MIN`] to [`HourSlot::MAX`]; instants
/// outside that range saturate to the nearest end, so `end_ms` never
/// overflows.
///
/// # Example
/// ```
/// use u_appoint::models::HourSlot;
///
/// let a = HourSlot::from_timestamp_ms(36_000_000 + 59_000);
/// let b = HourSlot::from_timestamp_ms(36_000_000 + 1_800_000);
/// assert_eq!(a, b);
/// assert_eq!(a.start_ms(), 36_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct HourSlot {
    start_ms: i64,
}

impl HourSlot {
    /// Earliest representable slot.
    pub const MIN: Self = Self {
        start_ms: MIN_START_MS,
    };

    /// Latest representable slot.
    pub const MAX: Self = Self {
        start_ms: MAX_START_MS,
    };

    /// Creates the slot containing `time_ms`, truncated to the hour.
    ///
    /// Truncation rounds toward negative infinity, so instants before
    /// the epoch map to the hour that contains them. Instants before
    /// [`HourSlot::MIN`] or after [`HourSlot::MAX`] saturate to them.
    pub fn from_timestamp_ms(time_ms: i64) -> Self {
        let clamped = time_ms.clamp(MIN_START_MS, MAX_START_MS + HOUR_MS - 1);
        Self {
            start_ms: clamped - clamped.rem_euclid(HOUR_MS),
        }
    }

    /// Slot start (ms, inclusive).
    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// Slot end (ms, exclusive).
    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.start_ms + HOUR_MS
    }

    /// Whether a timestamp falls inside this slot.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        self.window().contains(time_ms)
    }

    /// The interval covered by this slot.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_ms, self.end_ms())
    }

    /// The slot immediately after this one; [`HourSlot::MAX`] stays put.
    pub fn next(&self) -> Self {
        Self::from_timestamp_ms(self.end_ms())
    }
}

impl From<i64> for HourSlot {
    fn from(time_ms: i64) -> Self {
        Self::from_timestamp_ms(time_ms)
    }
}

impl From<HourSlot> for i64 {
    fn from(slot: HourSlot) -> Self {
        slot.start_ms
    }
}
