/// Convert HSV to 8-bit RGB using the standard sector formula.
///
/// `h` is in degrees (0-360), `s` and `v` in [0, 1]. Matches
/// `colorsys.hsv_to_rgb` channel-for-channel: the hue circle is split
/// into six sectors and each channel is rounded to the nearest integer.
///
/// # Examples
///
/// ```
/// use archroma::color::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
/// assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
/// assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), (255, 128, 0));
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = h / 360.0;
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (channel(r), channel(g), channel(b))
}

fn channel(x: f64) -> u8 {
    (x * 255.0).round() as u8
}
