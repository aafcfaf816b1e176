//! # 错误类型模块
//!
//! 定义解码核心使用的类型化错误。用户可见的错误文案与原版工具
//! 保持逐字节一致，以便上层界面直接展示。

use thiserror::Error;

/// 解码过程中可能出现的所有错误。
#[derive(Error, Debug)]
pub enum DecodeError {
    /// 图像中可用的隐写位不足 32 位，连长度前缀都无法容纳。
    #[error("Insufficient image data. 图像数据不足")]
    InsufficientImageData,

    /// 载荷长度前缀为零，或声明的长度超出了位流实际容量。
    #[error("Payload length invalid. 载荷长度异常")]
    InvalidPayloadLength,

    /// 文件头在某个字段处截断，无法继续解析。
    #[error("Header corrupted. 文件头损坏")]
    HeaderCorrupted,

    /// 文件头声明的数据长度与实际剩余字节数不符。
    #[error("Data length mismatch. 数据长度不匹配")]
    DataLengthMismatch,

    /// 载荷受密码保护，但调用方未提供密码。
    #[error("Password required. 需要密码")]
    PasswordRequired,

    /// 提供的密码与文件头中的哈希不匹配。
    #[error("Wrong password. 密码错误")]
    WrongPassword,

    /// 所有位深度都失败且没有记录到具体错误时的兜底错误。
    #[error("Decoding failed / 解析失败")]
    DecodeFailed,

    /// 图像解码失败（输入图像或 binpng 中间文件无法解析）。
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// 底层文件 I/O 失败。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
