pub mod bitmap;
pub mod count;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod scan;
pub mod type_utils;

pub use crate::count::{count, count_all, count_rows};
pub use crate::error::ScanError;
pub use crate::scan::{Predicate, scan, try_scan};
