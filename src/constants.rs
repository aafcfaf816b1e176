/// 水印区域占图像宽度的比例。
/// 提取时跳过左上角 `width * 0.40` 列以内的像素。
pub const WATERMARK_SKIP_W_RATIO: f64 = 0.40;

/// 水印区域占图像高度的比例。
/// 提取时跳过顶部 `height * 0.08` 行以内的像素。
pub const WATERMARK_SKIP_H_RATIO: f64 = 0.08;

/// 解码时依次尝试的位深度。
/// 按此固定顺序尝试，首个解析成功的位深度即被采用。
pub const BIT_DEPTHS: [u8; 3] = [2, 6, 8];

/// 恢复文件的固定基础文件名（不含扩展名）。
pub const OUTPUT_BASE_NAME: &str = "duck_recovered";

/// 密码哈希 (SHA-256 摘要) 在文件头中占用的字节数。
pub const PASSWORD_HASH_LEN: usize = 32;

/// 盐值在文件头中占用的字节数。
pub const SALT_LEN: usize = 16;
