//! Operator surface of the scanner.
//!
//! Comparison operators, the boolean combinators that merge a fresh match
//! word into an existing bitmap, and the signedness used for ordering.
//! Discriminants follow the native wire codes so hosts can pass raw bytes
//! through `TryFrom<u8>`.
//!
//! Lane hardware only provides signed "greater than" and "equal". Every
//! `CmpOp` is realized from one of those by a static [`Plan`]:
//!
//! | op    | primitive | swap | invert |
//! |-------|-----------|------|--------|
//! | `Gt`  | `>`       | no   | no     |
//! | `Lte` | `>`       | no   | yes    |
//! | `Lt`  | `>`       | yes  | no     |
//! | `Gte` | `>`       | yes  | yes    |
//! | `Eq`  | `==`      | no   | no     |
//! | `Neq` | `==`      | no   | yes    |

use std::fmt;
use std::str::FromStr;

use crate::error::ScanError;
use crate::type_utils::{UNSIGNED_BIAS, i8x64, shift_byte};

/// Comparison operator applied between each column byte and the scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CmpOp {
    Eq = 0,
    Neq = 1,
    Lt = 2,
    Lte = 3,
    Gt = 4,
    Gte = 5,
}

/// How a new match word merges into the existing bitmap word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoolOp {
    /// `word &= result`
    And = 0,
    /// `word &= !result`
    AndNot = 1,
    /// `word |= result`
    Or = 2,
}

/// Interpretation of column bytes for ordering comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Signing {
    #[default]
    Unsigned = 0,
    Signed = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    GreaterThan,
    Equal,
}

/// Realization of a `CmpOp` in terms of a native lane primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub primitive: Primitive,
    /// Compare `value > block` instead of `block > value`.
    pub swap: bool,
    /// Invert the primitive's result.
    pub invert: bool,
}

impl Plan {
    const fn new(primitive: Primitive, swap: bool, invert: bool) -> Self {
        Self {
            primitive,
            swap,
            invert,
        }
    }

    /// Evaluates 64 shifted lanes against the shifted scalar.
    #[inline(always)]
    pub fn block(self, block: i8x64, value: i8x64) -> u64 {
        let bits = match self.primitive {
            Primitive::GreaterThan if self.swap => value.cmp_gt(block),
            Primitive::GreaterThan => block.cmp_gt(value),
            Primitive::Equal => block.cmp_eq(value),
        };
        if self.invert { !bits } else { bits }
    }

    /// Scalar counterpart of [`Plan::block`] for one shifted byte.
    #[inline(always)]
    pub fn scalar(self, lane: i8, value: i8) -> bool {
        let hit = match self.primitive {
            Primitive::GreaterThan if self.swap => value > lane,
            Primitive::GreaterThan => lane > value,
            Primitive::Equal => lane == value,
        };
        hit != self.invert
    }
}

impl CmpOp {
    pub const ALL: [CmpOp; 6] = [
        CmpOp::Eq,
        CmpOp::Neq,
        CmpOp::Lt,
        CmpOp::Lte,
        CmpOp::Gt,
        CmpOp::Gte,
    ];

    pub const fn plan(self) -> Plan {
        match self {
            CmpOp::Gt => Plan::new(Primitive::GreaterThan, false, false),
            CmpOp::Lte => Plan::new(Primitive::GreaterThan, false, true),
            CmpOp::Lt => Plan::new(Primitive::GreaterThan, true, false),
            CmpOp::Gte => Plan::new(Primitive::GreaterThan, true, true),
            CmpOp::Eq => Plan::new(Primitive::Equal, false, false),
            CmpOp::Neq => Plan::new(Primitive::Equal, false, true),
        }
    }

    /// Operator matching exactly the rows this one rejects.
    pub const fn negate(self) -> Self {
        match self {
            CmpOp::Eq => CmpOp::Neq,
            CmpOp::Neq => CmpOp::Eq,
            CmpOp::Lt => CmpOp::Gte,
            CmpOp::Gte => CmpOp::Lt,
            CmpOp::Gt => CmpOp::Lte,
            CmpOp::Lte => CmpOp::Gt,
        }
    }

    /// Operator giving the same answer with operands swapped.
    pub const fn flip(self) -> Self {
        match self {
            CmpOp::Eq => CmpOp::Eq,
            CmpOp::Neq => CmpOp::Neq,
            CmpOp::Lt => CmpOp::Gt,
            CmpOp::Gt => CmpOp::Lt,
            CmpOp::Lte => CmpOp::Gte,
            CmpOp::Gte => CmpOp::Lte,
        }
    }

    /// Whether `lhs <op> rhs` holds under `signing`.
    #[inline]
    pub fn eval(self, lhs: u8, rhs: u8, signing: Signing) -> bool {
        let bias = signing.bias();
        self.plan().scalar(shift_byte(lhs, bias), shift_byte(rhs, bias))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Neq => "!=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
        }
    }
}

impl BoolOp {
    pub const ALL: [BoolOp; 3] = [BoolOp::And, BoolOp::AndNot, BoolOp::Or];
}

impl Signing {
    pub const ALL: [Signing; 2] = [Signing::Unsigned, Signing::Signed];

    /// Domain shift for this interpretation.
    pub const fn bias(self) -> u8 {
        match self {
            Signing::Unsigned => UNSIGNED_BIAS,
            Signing::Signed => 0,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolOp::And => f.pad("and"),
            BoolOp::AndNot => f.pad("andnot"),
            BoolOp::Or => f.pad("or"),
        }
    }
}

impl fmt::Display for Signing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signing::Unsigned => f.pad("unsigned"),
            Signing::Signed => f.pad("signed"),
        }
    }
}

impl FromStr for CmpOp {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" => Ok(CmpOp::Eq),
            "!=" | "<>" => Ok(CmpOp::Neq),
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Lte),
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Gte),
            other => Err(ScanError::UnknownCmpOp(other.to_string())),
        }
    }
}

impl FromStr for BoolOp {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "&" => Ok(BoolOp::And),
            "andnot" | "and not" | "&!" => Ok(BoolOp::AndNot),
            "or" | "|" => Ok(BoolOp::Or),
            _ => Err(ScanError::UnknownBoolOp(s.to_string())),
        }
    }
}

impl FromStr for Signing {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unsigned" | "u8" => Ok(Signing::Unsigned),
            "signed" | "i8" => Ok(Signing::Signed),
            _ => Err(ScanError::UnknownSigning(s.to_string())),
        }
    }
}

impl TryFrom<u8> for CmpOp {
    type Error = ScanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        CmpOp::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ScanError::UnknownCmpOp(code.to_string()))
    }
}

impl TryFrom<u8> for BoolOp {
    type Error = ScanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        BoolOp::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ScanError::UnknownBoolOp(code.to_string()))
    }
}

impl TryFrom<u8> for Signing {
    type Error = ScanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Signing::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ScanError::UnknownSigning(code.to_string()))
    }
}
