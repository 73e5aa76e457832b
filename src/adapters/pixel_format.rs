//! Pixel format conversion helpers for presentation adapters.

/// Copies RGBA pixel data to RGB format, dropping alpha.
///
/// # Arguments
/// * `src` - Source buffer with RGBA data (4 bytes per pixel)
/// * `dst` - Destination buffer for RGB data (3 bytes per pixel)
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or if `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / 4) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

/// Allocating form of [`copy_rgba_to_rgb`].
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0; (src.len() / 4) * 3];
    copy_rgba_to_rgb(&src[..(src.len() / 4) * 4], &mut dst);
    dst
}
