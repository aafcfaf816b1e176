//! # 文件头解析模块
//!
//! 负责从位流中取出载荷字节，并按约定的二进制布局解析文件头：
//!
//! ```text
//! has_password:u8
//! if has_password == 1:
//!     expected_hash:[u8;32]  salt:[u8;16]
//! ext_len:u8  extension:[u8;ext_len]
//! data_len:u32 (大端)  data:[u8;data_len]
//! ```
//!
//! 受密码保护的载荷在哈希校验通过后用密钥流异或解密。

use sha2::{Digest, Sha256};

use crate::constants::{PASSWORD_HASH_LEN, SALT_LEN};
use crate::error::DecodeError;
use crate::keystream::{generate_key_stream, xor_key_stream};

/// 读取位流前 32 位作为大端 `header_len`（字节数），返回其后的载荷字节。
///
/// # Errors
///
/// `header_len` 为零或超出位流容量时返回 [`DecodeError::InvalidPayloadLength`]。
pub fn payload_from_bits(bits: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if bits.len() < 32 {
        return Err(DecodeError::InsufficientImageData);
    }
    let header_len = u32::from_be_bytes([
        pack_byte(&bits[0..8]),
        pack_byte(&bits[8..16]),
        pack_byte(&bits[16..24]),
        pack_byte(&bits[24..32]),
    ]) as usize;

    let total_bits = 32 + header_len * 8;
    if header_len == 0 || total_bits > bits.len() {
        return Err(DecodeError::InvalidPayloadLength);
    }

    Ok(bits[32..total_bits]
        .chunks_exact(8)
        .map(pack_byte)
        .collect())
}

/// 解析文件头并返回 `(数据, 扩展名)`。
///
/// 无密码时数据原样返回；有密码时先校验 SHA-256 哈希，再用密钥流解密。
///
/// # Errors
///
/// * 任一字段声明的长度超出剩余字节时返回 [`DecodeError::HeaderCorrupted`]。
/// * `data_len` 与实际剩余字节数不符时返回 [`DecodeError::DataLengthMismatch`]。
/// * 载荷受保护但密码为空时返回 [`DecodeError::PasswordRequired`]。
/// * 密码哈希不匹配时返回 [`DecodeError::WrongPassword`]。
pub fn parse_header(header: &[u8], password: &str) -> Result<(Vec<u8>, String), DecodeError> {
    let mut idx = 0;
    if header.is_empty() {
        return Err(DecodeError::HeaderCorrupted);
    }
    let has_pwd = header[0] == 1;
    idx += 1;

    let mut pwd_hash: &[u8] = &[];
    let mut salt: &[u8] = &[];
    if has_pwd {
        if header.len() < idx + PASSWORD_HASH_LEN + SALT_LEN {
            return Err(DecodeError::HeaderCorrupted);
        }
        pwd_hash = &header[idx..idx + PASSWORD_HASH_LEN];
        idx += PASSWORD_HASH_LEN;
        salt = &header[idx..idx + SALT_LEN];
        idx += SALT_LEN;
    }

    if header.len() < idx + 1 {
        return Err(DecodeError::HeaderCorrupted);
    }
    let ext_len = header[idx] as usize;
    idx += 1;

    if header.len() < idx + ext_len + 4 {
        return Err(DecodeError::HeaderCorrupted);
    }
    let ext = utf8_ignoring_errors(&header[idx..idx + ext_len]);
    idx += ext_len;

    let data_len = u32::from_be_bytes([
        header[idx],
        header[idx + 1],
        header[idx + 2],
        header[idx + 3],
    ]) as usize;
    idx += 4;

    let data = &header[idx..];
    if data.len() != data_len {
        return Err(DecodeError::DataLengthMismatch);
    }

    if !has_pwd {
        return Ok((data.to_vec(), ext));
    }
    if password.is_empty() {
        return Err(DecodeError::PasswordRequired);
    }

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(hex::encode(salt).as_bytes());
    if hasher.finalize().as_slice() != pwd_hash {
        return Err(DecodeError::WrongPassword);
    }

    let ks = generate_key_stream(password, salt, data.len());
    Ok((xor_key_stream(data, &ks), ext))
}

/// 将 8 个位（高位在前）打包成一个字节。
fn pack_byte(bits: &[u8]) -> u8 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | b)
}

/// 按“忽略错误”的方式解码 UTF-8：非法字节序列被整段丢弃，
/// 而不是替换为占位符。与编码端的宽容解码行为保持一致。
fn utf8_ignoring_errors(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                out.push_str(s);
                break;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(&String::from_utf8_lossy(valid));
                let skip = e.error_len().unwrap_or(rest.len());
                if skip >= rest.len() {
                    break;
                }
                bytes = &rest[skip..];
            }
        }
    }
    out
}
