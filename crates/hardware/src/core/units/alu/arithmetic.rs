//! ALU arithmetic operations.
//!
//! All results wrap on overflow, including `i32::MIN / -1`.

/// `a + b`.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`.
#[inline]
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// `a * b`.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `a / b`, truncating toward zero. `None` when `b` is zero.
#[inline]
pub const fn divide(a: i32, b: i32) -> Option<i32> {
    if b == 0 {
        None
    } else {
        Some(a.wrapping_div(b))
    }
}
