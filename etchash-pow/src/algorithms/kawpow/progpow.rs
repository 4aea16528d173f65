/// ProgPoW random math and merge instructions, as used by KawPow
///
/// The random program is a stream of selectors produced upstream. Each
/// selector picks one of a fixed set of operations by modulo. The decoding
/// below must match every other implementation exactly, otherwise miners and
/// validators compute different mix digests.

use super::math::{clz32, min_u32, mul_hi32, popcount32, rotl32, rotr32};

/// Number of distinct random math operations
pub const MATH_OP_COUNT: u32 = 11;
/// Number of distinct merge operations
pub const MERGE_OP_COUNT: u32 = 4;

/// Random math operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Mul,
    MulHi,
    Min,
    Rotl,
    Rotr,
    And,
    Or,
    Xor,
    Clz,
    PopCount,
}

impl MathOp {
    /// Decode a selector (`selector % 11`)
    pub fn from_selector(selector: u32) -> Self {
        match selector % MATH_OP_COUNT {
            0 => MathOp::Add,
            1 => MathOp::Mul,
            2 => MathOp::MulHi,
            3 => MathOp::Min,
            4 => MathOp::Rotl,
            5 => MathOp::Rotr,
            6 => MathOp::And,
            7 => MathOp::Or,
            8 => MathOp::Xor,
            9 => MathOp::Clz,
            10 => MathOp::PopCount,
            _ => unreachable!(),
        }
    }

    #[inline]
    pub fn apply(&self, a: u32, b: u32) -> u32 {
        match self {
            MathOp::Add => a.wrapping_add(b),
            MathOp::Mul => a.wrapping_mul(b),
            MathOp::MulHi => mul_hi32(a, b),
            MathOp::Min => min_u32(a, b),
            MathOp::Rotl => rotl32(a, b),
            MathOp::Rotr => rotr32(a, b),
            MathOp::And => a & b,
            MathOp::Or => a | b,
            MathOp::Xor => a ^ b,
            MathOp::Clz => clz32(a) + clz32(b),
            MathOp::PopCount => popcount32(a) + popcount32(b),
        }
    }
}

/// Merge operation for combining a new value into a mix register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOp {
    /// `a * 33 + b`
    MulAdd,
    /// `(a ^ b) * 33`
    XorMul,
    /// `rotl(a, x) ^ b`
    RotlXor(u32),
    /// `rotr(a, x) ^ b`
    RotrXor(u32),
}

impl MergeOp {
    /// Decode a selector: the low bits pick the operation (`selector % 4`),
    /// the high half supplies the rotation.
    pub fn from_selector(selector: u32) -> Self {
        let x = merge_rotation(selector);
        match selector % MERGE_OP_COUNT {
            0 => MergeOp::MulAdd,
            1 => MergeOp::XorMul,
            2 => MergeOp::RotlXor(x),
            3 => MergeOp::RotrXor(x),
            _ => unreachable!(),
        }
    }

    #[inline]
    pub fn apply(&self, a: u32, b: u32) -> u32 {
        match *self {
            MergeOp::MulAdd => a.wrapping_mul(33).wrapping_add(b),
            MergeOp::XorMul => (a ^ b).wrapping_mul(33),
            MergeOp::RotlXor(x) => rotl32(a, x) ^ b,
            MergeOp::RotrXor(x) => rotr32(a, x) ^ b,
        }
    }
}

/// Rotation used by the rotating merges, always in `1..=31`.
#[inline]
pub fn merge_rotation(selector: u32) -> u32 {
    ((selector >> 16) % 31) + 1
}

/// Apply the random math operation chosen by `selector` to `a` and `b`
#[inline]
pub fn random_math(a: u32, b: u32, selector: u32) -> u32 {
    MathOp::from_selector(selector).apply(a, b)
}

/// Merge `b` into `a` with the operation chosen by `selector`
#[inline]
pub fn random_merge(a: u32, b: u32, selector: u32) -> u32 {
    MergeOp::from_selector(selector).apply(a, b)
}
