//! Fair-value combiner.

/// Merge two independently chosen values into one: `(a + b) mod modulus`.
///
/// This is the sole combination function of the protocol. The result is
/// uniform over `[0, modulus)` whenever at least one operand is uniform and
/// independent of the other, which is what makes the joint draw fair.
pub fn combine(a: u32, b: u32, modulus: u32) -> u32 {
    assert!(modulus > 0, "modulus must be positive");
    debug_assert!(a < modulus && b < modulus, "operands must be in range");
    ((u64::from(a) + u64::from(b)) % u64::from(modulus)) as u32
}
