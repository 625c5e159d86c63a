//! Balance projection engine
//!
//! A projection run is a pure transform: given a read-only snapshot of
//! ledger entries, an opening balance, and a horizon, expand every
//! recurring entry into its dated occurrences, fold them onto the
//! horizon's day axis, and walk the running balance forward. Nothing is
//! written back, so independent runs (e.g. over different horizons) need
//! no coordination.
//!
//! The horizon start is always an explicit input; callers that want
//! "from today" resolve the clock themselves at the outermost layer.

mod accumulate;
mod expand;
mod horizon;
mod summary;

pub use accumulate::project;
pub use expand::{expand, Occurrence, Occurrences};
pub use horizon::{Horizon, ProjectionYears, MAX_PROJECTION_YEARS};
pub use summary::select_summary;
