use image::RgbImage;

use crate::constants::{WATERMARK_SKIP_H_RATIO, WATERMARK_SKIP_W_RATIO};
use crate::error::DecodeError;

/// 按位深度 `k` 从图像中提取隐写位流。
///
/// 跳过左上角水印区域后，对每个通道字节取其低 `k` 位，
/// 按高位在前的顺序展开为单个位，像素按行优先顺序遍历。
pub fn extract_bits(img: &RgbImage, k: u8) -> Result<Vec<u8>, DecodeError> {
    let (w, h) = img.dimensions();
    let skip_w = (f64::from(w) * WATERMARK_SKIP_W_RATIO) as u32;
    let skip_h = (f64::from(h) * WATERMARK_SKIP_H_RATIO) as u32;
    let mask = ((1u16 << k) - 1) as u8;

    let mut bits = Vec::with_capacity(w as usize * h as usize * 3 * k as usize);
    for (x, y, pixel) in img.enumerate_pixels() {
        if y < skip_h && x < skip_w {
            continue;
        }
        for &channel in pixel.0.iter() {
            let low = channel & mask;
            for i in (0..k).rev() {
                bits.push((low >> i) & 1);
            }
        }
    }

    if bits.len() < 32 {
        return Err(DecodeError::InsufficientImageData);
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_low_bits_msb_first() {
        // 单像素图像不触发水印跳过，三个通道依次产出低 2 位
        let img = RgbImage::from_fn(4, 4, |_, _| image::Rgb([0b11, 0b10, 0b01]));
        let bits = extract_bits(&img, 2).expect("4x4 image has enough bits");
        assert_eq!(&bits[..6], &[1, 1, 1, 0, 0, 1]);
        assert_eq!(bits.len(), 4 * 4 * 3 * 2);
    }

    #[test]
    fn depth_eight_returns_whole_bytes() {
        let img = RgbImage::from_fn(4, 4, |_, _| image::Rgb([0xA5, 0, 0]));
        let bits = extract_bits(&img, 8).expect("4x4 image has enough bits");
        assert_eq!(&bits[..8], &[1, 0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn watermark_region_is_skipped() {
        // 100x100: 水印区域为前 8 行 x 前 40 列
        let img = RgbImage::from_fn(100, 100, |x, y| {
            if y < 8 && x < 40 {
                image::Rgb([1, 1, 1])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let bits = extract_bits(&img, 2).expect("100x100 image has enough bits");
        assert!(bits.iter().all(|&b| b == 0), "masked pixels must not leak into the bitstream");
        assert_eq!(bits.len(), (100 * 100 - 8 * 40) * 3 * 2);
    }

    #[test]
    fn too_small_image_fails() {
        let img = RgbImage::new(1, 1);
        let err = extract_bits(&img, 2).unwrap_err();
        assert!(matches!(err, DecodeError::InsufficientImageData));
    }
}
