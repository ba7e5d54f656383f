//! Availability report
//!
//! Prints a site count followed by one numbered listing per sort order.

mod duration;
mod renderer;
mod sort;

pub use duration::format_duration;
pub use renderer::{Reporter, appointment_types, render_site};
pub use sort::SortOrder;
