use super::*;
use crate::foundation::core::Detail;
use crate::foundation::error::TraceError;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, _| {
        if x % 2 == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

#[test]
fn garbage_bytes_fail_with_decode_error() {
    let err = decode_for_detail(b"definitely not an image", Detail::Medium).unwrap_err();
    assert!(matches!(err, TraceError::Decode(_)));
}

#[test]
fn small_images_pass_through_unscaled() {
    let buf = decode_for_detail(&png_bytes(64, 48), Detail::Low).unwrap();
    assert_eq!((buf.width(), buf.height()), (64, 48));
}

#[test]
fn longer_dimension_is_capped_per_detail() {
    let bytes = png_bytes(400, 200);
    let high = decode_for_detail(&bytes, Detail::High).unwrap();
    assert_eq!((high.width(), high.height()), (180, 90));
    let medium = decode_for_detail(&bytes, Detail::Medium).unwrap();
    assert_eq!((medium.width(), medium.height()), (140, 70));
    let low = decode_for_detail(&bytes, Detail::Low).unwrap();
    assert_eq!((low.width(), low.height()), (100, 50));
}

#[test]
fn portrait_images_cap_on_height() {
    let buf = decode_for_detail(&png_bytes(100, 500), Detail::Low).unwrap();
    assert_eq!((buf.width(), buf.height()), (20, 100));
}

#[test]
fn exact_cap_is_not_resampled() {
    let buf = decode_for_detail(&png_bytes(180, 20), Detail::High).unwrap();
    assert_eq!((buf.width(), buf.height()), (180, 20));
}

#[test]
fn decode_is_deterministic() {
    let bytes = png_bytes(300, 300);
    let a = decode_for_detail(&bytes, Detail::Medium).unwrap();
    let b = decode_for_detail(&bytes, Detail::Medium).unwrap();
    assert_eq!(a, b);
}
