//! ALU bitwise operations.

/// `a & b`.
#[inline]
pub const fn and(a: i32, b: i32) -> i32 {
    a & b
}

/// `a | b`.
#[inline]
pub const fn or(a: i32, b: i32) -> i32 {
    a | b
}
