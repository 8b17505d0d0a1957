//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Scale a source image to an exact width, preserving aspect ratio.
///
/// # Examples
/// ```
/// # use responsive_sets::imaging::scale_to_width;
/// // 2000x1500 scaled to width 800 → 800x600
/// assert_eq!(scale_to_width((2000, 1500), 800), (800, 600));
/// ```
pub fn scale_to_width(source: (u32, u32), width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    let ratio = width as f64 / src_w as f64;
    (width, (src_h as f64 * ratio).round().max(1.0) as u32)
}

/// Scale a source image to an exact height, preserving aspect ratio.
pub fn scale_to_height(source: (u32, u32), height: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    let ratio = height as f64 / src_h as f64;
    ((src_w as f64 * ratio).round().max(1.0) as u32, height)
}

/// Calculate dimensions that fit entirely within a target box.
///
/// Preserves the source aspect ratio; at least one output dimension matches
/// the target, neither exceeds it.
pub fn fit_within(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: width matches, height shrinks
        scale_to_width(source, tgt_w)
    } else {
        scale_to_height(source, tgt_h)
    }
}
