//! Aggregate views over the district case table.
//!
//! Each query takes a freshly loaded [`CaseTable`](crate::dataset::CaseTable)
//! and returns one serializable response shape. Queries never share state.

pub mod daily;
pub mod matrix;
pub mod regional;
pub mod summary;
pub mod types;
pub mod utility;

pub use daily::daily_statistics;
pub use matrix::region_daily;
pub use regional::{map_data, region_statistics};
pub use summary::summary;
