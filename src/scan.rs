//! Predicate scanner.
//!
//! Compares every byte of a column against a scalar and merges one match bit
//! per row into a caller-owned bitmap. Full 64-row chunks go through the
//! `i8x64` lanes and produce one bitmap word each; the 0..63 trailing rows are
//! compared one at a time and merged into the final word with the same
//! combinator. Operator, combinator and signing are dispatched once per call
//! into a monomorphized kernel, so the inner loop carries no operator branch.

use tracing::debug;

use crate::bitmap::word_count;
use crate::error::ScanError;
use crate::ops::{BoolOp, CmpOp, Plan, Signing};
use crate::type_utils::{LANES, UNSIGNED_BIAS, i8x64, shift_byte};

/// A comparison together with how it is merged and how bytes are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub cmp: CmpOp,
    pub bool_op: BoolOp,
    pub signing: Signing,
}

impl Predicate {
    /// Intersecting, unsigned predicate.
    pub fn new(cmp: CmpOp) -> Self {
        Self {
            cmp,
            bool_op: BoolOp::And,
            signing: Signing::Unsigned,
        }
    }

    pub fn with_bool_op(mut self, bool_op: BoolOp) -> Self {
        self.bool_op = bool_op;
        self
    }

    pub fn with_signing(mut self, signing: Signing) -> Self {
        self.signing = signing;
        self
    }

    pub fn scan(&self, column: &[u8], value: u8, bitmap: &mut [u64]) {
        scan(self.cmp, self.bool_op, self.signing, column, value, bitmap)
    }

    pub fn try_scan(&self, column: &[u8], value: u8, bitmap: &mut [u64]) -> Result<(), ScanError> {
        try_scan(self.cmp, self.bool_op, self.signing, column, value, bitmap)
    }
}

/// Evaluates `column[i] <cmp> value` for every row and merges the result
/// into `bitmap` with `bool_op`.
///
/// `bitmap` must hold at least `word_count(column.len())` words. A shorter
/// bitmap turns the call into a no-op and leaves it untouched; callers must
/// size it correctly rather than rely on that.
pub fn scan(
    cmp: CmpOp,
    bool_op: BoolOp,
    signing: Signing,
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) {
    let required = word_count(column.len());
    if bitmap.len() < required {
        debug!(
            rows = column.len(),
            words = bitmap.len(),
            required,
            "bitmap cannot hold every row, skipping scan"
        );
        return;
    }
    dispatch_cmp(cmp, bool_op, signing, column, value, bitmap);
}

/// Like [`scan`], but reports an undersized bitmap instead of skipping.
pub fn try_scan(
    cmp: CmpOp,
    bool_op: BoolOp,
    signing: Signing,
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) -> Result<(), ScanError> {
    let required = word_count(column.len());
    if bitmap.len() < required {
        return Err(ScanError::BitmapTooSmall {
            rows: column.len(),
            words: bitmap.len(),
            required,
        });
    }
    dispatch_cmp(cmp, bool_op, signing, column, value, bitmap);
    Ok(())
}

pub fn where_greater_than(column: &[u8], value: u8, bitmap: &mut [u64]) {
    Predicate::new(CmpOp::Gt).scan(column, value, bitmap)
}

pub fn where_less_than(column: &[u8], value: u8, bitmap: &mut [u64]) {
    Predicate::new(CmpOp::Lt).scan(column, value, bitmap)
}

pub fn where_equals(column: &[u8], value: u8, bitmap: &mut [u64]) {
    Predicate::new(CmpOp::Eq).scan(column, value, bitmap)
}

// Uninhabited markers that lift the runtime operator choice into types.

trait Comparison {
    const PLAN: Plan;
}

trait Combinator {
    fn merge(word: u64, result: u64) -> u64;
}

trait Domain {
    const BIAS: u8;
}

macro_rules! comparison {
    ($name:ident, $op:expr) => {
        enum $name {}

        impl Comparison for $name {
            const PLAN: Plan = $op.plan();
        }
    };
}

comparison!(Equals, CmpOp::Eq);
comparison!(NotEquals, CmpOp::Neq);
comparison!(LessThan, CmpOp::Lt);
comparison!(LessThanOrEqual, CmpOp::Lte);
comparison!(GreaterThan, CmpOp::Gt);
comparison!(GreaterThanOrEqual, CmpOp::Gte);

enum Intersect {}
enum Subtract {}
enum Union {}

impl Combinator for Intersect {
    #[inline(always)]
    fn merge(word: u64, result: u64) -> u64 {
        word & result
    }
}

impl Combinator for Subtract {
    #[inline(always)]
    fn merge(word: u64, result: u64) -> u64 {
        word & !result
    }
}

impl Combinator for Union {
    #[inline(always)]
    fn merge(word: u64, result: u64) -> u64 {
        word | result
    }
}

enum UnsignedDomain {}
enum SignedDomain {}

impl Domain for UnsignedDomain {
    const BIAS: u8 = UNSIGNED_BIAS;
}

impl Domain for SignedDomain {
    const BIAS: u8 = 0;
}

fn dispatch_cmp(
    cmp: CmpOp,
    bool_op: BoolOp,
    signing: Signing,
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) {
    match cmp {
        CmpOp::Eq => dispatch_bool::<Equals>(bool_op, signing, column, value, bitmap),
        CmpOp::Neq => dispatch_bool::<NotEquals>(bool_op, signing, column, value, bitmap),
        CmpOp::Lt => dispatch_bool::<LessThan>(bool_op, signing, column, value, bitmap),
        CmpOp::Lte => dispatch_bool::<LessThanOrEqual>(bool_op, signing, column, value, bitmap),
        CmpOp::Gt => dispatch_bool::<GreaterThan>(bool_op, signing, column, value, bitmap),
        CmpOp::Gte => {
            dispatch_bool::<GreaterThanOrEqual>(bool_op, signing, column, value, bitmap)
        }
    }
}

fn dispatch_bool<P: Comparison>(
    bool_op: BoolOp,
    signing: Signing,
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) {
    match bool_op {
        BoolOp::And => dispatch_signing::<P, Intersect>(signing, column, value, bitmap),
        BoolOp::AndNot => dispatch_signing::<P, Subtract>(signing, column, value, bitmap),
        BoolOp::Or => dispatch_signing::<P, Union>(signing, column, value, bitmap),
    }
}

fn dispatch_signing<P: Comparison, C: Combinator>(
    signing: Signing,
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) {
    match signing {
        Signing::Unsigned => scan_kernel::<P, C, UnsignedDomain>(column, value, bitmap),
        Signing::Signed => scan_kernel::<P, C, SignedDomain>(column, value, bitmap),
    }
}

// Caller guarantees bitmap.len() >= word_count(column.len()).
#[inline(never)]
fn scan_kernel<P: Comparison, C: Combinator, D: Domain>(
    column: &[u8],
    value: u8,
    bitmap: &mut [u64],
) {
    let plan = P::PLAN;
    let value = shift_byte(value, D::BIAS);
    let value_block = i8x64::splat(value);

    let chunks = column.chunks_exact(LANES);
    let tail = chunks.remainder();

    for (chunk, word) in chunks.zip(bitmap.iter_mut()) {
        let mut block = i8x64::from_bytes(chunk);
        if D::BIAS != 0 {
            block = block.shift(D::BIAS);
        }
        *word = C::merge(*word, plan.block(block, value_block));
    }

    if tail.is_empty() {
        return;
    }

    let mut result = 0u64;
    for (bit, &byte) in tail.iter().enumerate() {
        if plan.scalar(shift_byte(byte, D::BIAS), value) {
            result |= 1 << bit;
        }
    }
    let last = column.len() / LANES;
    bitmap[last] = C::merge(bitmap[last], result);
}
