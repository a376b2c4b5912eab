//! Convenient re-exports for common types and functions
//!
//! Import everything you typically need with:
//! `use bytescan::prelude::*;`.

// Scanner entry points
pub use crate::scan::{
    Predicate, scan, try_scan, where_equals, where_greater_than, where_less_than,
};

// Operator enums
pub use crate::ops::{BoolOp, CmpOp, Signing};

// Counting and bitmap layout
pub use crate::bitmap::{clear_tail, is_match, matching_rows, tail_mask, word_count};
pub use crate::count::{count, count_all, count_rows};

pub use crate::error::ScanError;
