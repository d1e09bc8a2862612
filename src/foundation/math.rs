/// `round(num / den)` with ties going to the even neighbour, in exact integer math.
///
/// `den` must be non-zero.
pub fn div_round_half_even(num: u64, den: u64) -> u64 {
    let q = num / den;
    let r = num % den;
    let twice = r * 2;
    if twice > den || (twice == den && q % 2 == 1) {
        q + 1
    } else {
        q
    }
}

/// Boundaries of part `index` when `extent` pixels are split into `parts` pieces.
///
/// Returns `(round(index * extent / parts), round((index + 1) * extent / parts))`.
/// Consecutive parts share their boundary, so the pieces tile `[0, extent)`
/// with remainder pixels spread across parts instead of clipped.
pub fn slice_bounds(extent: u32, parts: u32, index: u32) -> (u32, u32) {
    debug_assert!(parts > 0 && index < parts);
    let extent = u64::from(extent);
    let parts = u64::from(parts);
    let index = u64::from(index);
    let start = div_round_half_even(index * extent, parts);
    let end = div_round_half_even((index + 1) * extent, parts);
    (start as u32, end as u32)
}

/// `ceil(total / per_row)`; `per_row` must be non-zero.
pub fn rows_needed(total: usize, per_row: usize) -> usize {
    total.div_ceil(per_row)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
