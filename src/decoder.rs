//! # 解码编排模块
//!
//! 驱动端到端的解码流程：按固定顺序尝试位深度、解析文件头、
//! 处理 `.binpng` 中间文件，并把恢复的文件写入输出目录。

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::binpng;
use crate::constants::{BIT_DEPTHS, OUTPUT_BASE_NAME};
use crate::error::DecodeError;
use crate::extract;
use crate::header;

/// 一次成功解码的产物。
#[derive(Debug)]
pub struct DecodedArtifact {
    /// 恢复文件的完整路径。
    pub path: PathBuf,
    /// 最终扩展名（不含前导点）。
    pub extension: String,
    /// 人类可读的文件大小描述。
    pub size: String,
}

/// 从像素缓冲中解码隐藏的文件并写入 `output_dir`。
///
/// 依次尝试位深度 2、6、8，首个解析成功的位深度即被采用；每次失败
/// 仅被记录，全部失败时返回最后一次的错误。恢复文件固定命名为
/// `duck_recovered`，已存在的同名文件会被直接覆盖。
///
/// `progress` 回调（如提供）在各阶段被同步调用，不得长时间阻塞。
///
/// # Errors
///
/// 提取或解析的错误见 [`DecodeError`]；目录创建、文件写入以及
/// `.binpng` 中间文件的处理失败会立即中止并原样传出。
pub fn decode(
    img: &RgbImage,
    password: &str,
    output_dir: &Path,
    mut progress: Option<&mut dyn FnMut(&str)>,
) -> Result<DecodedArtifact, DecodeError> {
    if let Some(cb) = progress.as_mut() {
        cb("Loading image... 正在加载图像");
    }
    if let Some(cb) = progress.as_mut() {
        cb("Extracting data... 正在提取隐写数据");
    }

    let mut recovered = None;
    let mut last_err = None;
    for &k in BIT_DEPTHS.iter() {
        let attempt = extract::extract_bits(img, k)
            .and_then(|bits| header::payload_from_bits(&bits))
            .and_then(|payload| header::parse_header(&payload, password));
        match attempt {
            Ok(pair) => {
                recovered = Some(pair);
                break;
            }
            Err(e) => last_err = Some(e),
        }
    }
    let (raw, ext) = match recovered {
        Some(pair) => pair,
        None => return Err(last_err.unwrap_or(DecodeError::DecodeFailed)),
    };

    if let Some(cb) = progress.as_mut() {
        cb("Saving file... 正在保存文件");
    }

    fs::create_dir_all(output_dir)?;

    let (final_path, final_ext) = if ext.ends_with(".binpng") {
        let tmp_png = output_dir.join(format!("{OUTPUT_BASE_NAME}.binpng"));
        fs::write(&tmp_png, &raw)?;
        let mp4_bytes = binpng::binpng_to_mp4_bytes(&tmp_png)?;
        fs::remove_file(&tmp_png)?;

        let final_path = output_dir.join(format!("{OUTPUT_BASE_NAME}.mp4"));
        fs::write(&final_path, mp4_bytes)?;
        (final_path, "mp4".to_string())
    } else {
        let file_name = if ext.starts_with('.') {
            format!("{OUTPUT_BASE_NAME}{ext}")
        } else {
            format!("{OUTPUT_BASE_NAME}.{ext}")
        };
        let final_path = output_dir.join(file_name);
        fs::write(&final_path, &raw)?;
        (final_path, ext.trim_start_matches('.').to_string())
    };

    let size = fs::metadata(&final_path)?.len();

    Ok(DecodedArtifact {
        path: final_path,
        extension: final_ext,
        size: format_size(size),
    })
}

/// 把字节数格式化为人类可读的大小描述。
pub fn format_size(size: u64) -> String {
    if size > 1024 * 1024 {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    } else if size > 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{size} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_string_uses_original_thresholds() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(2), "2 bytes");
        assert_eq!(format_size(1024), "1024 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(1024 * 1024), "1024.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.50 MB");
    }
}
