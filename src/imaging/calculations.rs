//! Pure placement math for previews.
//!
//! All functions here are pure and testable without any I/O or images.

/// Offset that centers an image of `image` size on a canvas of `canvas` size.
///
/// Each axis is `(canvas - image) / 2`, floor-divided. The result is negative
/// when the image is larger than the canvas; drawing then clips symmetrically.
///
/// # Examples
/// ```
/// # use art_preview::imaging::centering_offset;
/// assert_eq!(centering_offset((8000, 8000), (2800, 3733)), (2600, 2133));
/// assert_eq!(centering_offset((100, 100), (201, 100)), (-51, 0));
/// ```
pub fn centering_offset(canvas: (u32, u32), image: (u32, u32)) -> (i64, i64) {
    let axis = |c: u32, i: u32| (c as i64 - i as i64).div_euclid(2);
    (axis(canvas.0, image.0), axis(canvas.1, image.1))
}

/// Whether an image placed at `offset` lies entirely within the canvas.
pub fn fits_canvas(canvas: (u32, u32), image: (u32, u32), offset: (i64, i64)) -> bool {
    offset.0 >= 0
        && offset.1 >= 0
        && offset.0 + image.0 as i64 <= canvas.0 as i64
        && offset.1 + image.1 as i64 <= canvas.1 as i64
}
