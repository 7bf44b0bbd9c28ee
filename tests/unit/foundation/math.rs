use super::*;

#[test]
fn shade_delta_rounds_half_up() {
    assert_eq!(shade_delta(0), 0);
    assert_eq!(shade_delta(10), 26); // 25.5
    assert_eq!(shade_delta(-10), -25); // -25.5
    assert_eq!(shade_delta(20), 51);
    assert_eq!(shade_delta(-30), -76); // -76.5
    assert_eq!(shade_delta(100), 255);
    assert_eq!(shade_delta(-100), -255);
}

#[test]
fn shade_delta_saturates_for_extreme_percents() {
    assert_eq!(shade_delta(i32::MAX), 255);
    assert_eq!(shade_delta(i32::MIN), -255);
}

#[test]
fn offset_channel_clamps() {
    assert_eq!(offset_channel(250, 20), 255);
    assert_eq!(offset_channel(5, -20), 0);
    assert_eq!(offset_channel(100, 0), 100);
}

#[test]
fn shade_delta_uses_exact_decimal_rounding() {
    // 2.55 * p is not exact in binary floating point at these percents
    assert_eq!(shade_delta(50), 128);
    assert_eq!(shade_delta(90), 230);
    assert_eq!(shade_delta(-50), -127);
    assert_eq!(shade_delta(-90), -229);
}
