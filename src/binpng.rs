//! # binpng 还原模块
//!
//! `.binpng` 载荷是把任意字节伪装成 RGB 像素后编码出的图片文件。
//! 还原时将图片解码回 RGB，按行优先顺序摊平所有通道字节，
//! 再去掉末尾连续的零字节（编码端用零填充凑齐最后一个像素）。
//!
//! 已知局限：若原始数据本身以零字节结尾，这些字节同样会被去掉。

use std::path::Path;

use crate::error::DecodeError;

/// 将 `.binpng` 中间文件还原为原始字节流（写出时使用 `.mp4` 扩展名）。
pub fn binpng_to_mp4_bytes(path: &Path) -> Result<Vec<u8>, DecodeError> {
    let img = image::open(path)?.to_rgb8();
    let mut flat = img.into_raw();
    let end = flat.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    flat.truncate(end);
    Ok(flat)
}
