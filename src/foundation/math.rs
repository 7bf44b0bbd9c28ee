/// Channel offset for a shade percentage: `round(2.55 * percent)`.
///
/// Computed exactly in integer space as round-half-up of `255 * percent / 100`, so the result is
/// independent of float representation. Float `(2.55 * p).round()` differs at some percents
/// (`2.55 * 50.0` is `127.49999...`); exact rounding is the chosen behavior, so
/// `derive_shade_hex("#000000", 50)` is `#808080`. Saturates at a full channel swing.
pub(crate) fn shade_delta(percent: i32) -> i32 {
    let scaled = 255_i64 * i64::from(percent);
    (scaled + 50).div_euclid(100).clamp(-255, 255) as i32
}

pub(crate) fn offset_channel(c: u8, delta: i32) -> u8 {
    (i32::from(c) + delta).clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
