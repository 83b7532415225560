//! Matching domain models.
//!
//! Provides the data types for describing who can take which slot
//! (inputs) and who got which slot (outputs).
//!
//! # Domain Mappings
//!
//! | u-appoint | Clinic | Office hours | Events |
//! |-----------|--------|--------------|--------|
//! | User | Patient | Student | Attendee |
//! | Slot | Appointment hour | Consultation block | Session seat |
//! | PreferenceGraph | Availability form | Sign-up sheet | Registration |
//! | MatchResult | Booking list | Roster | Seat plan |

mod graph;
mod result;
mod slot;
mod table;

pub use graph::PreferenceGraph;
pub use result::{MatchResult, SlotAssignment};
pub use slot::{HourSlot, TimeWindow, HOUR_MS};
pub use table::{SlotRow, SlotTable};
