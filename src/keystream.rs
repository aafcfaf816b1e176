//! # 密钥流生成模块
//!
//! 由密码和盐值派生任意长度的伪随机字节流。生成方式与编码端约定一致：
//! 对 `password + hex(salt) + counter` 依次取 SHA-256，拼接摘要直至足够长。
//! 加解密是同一个对称操作：逐字节异或。

use sha2::{Digest, Sha256};

/// 生成 `length` 字节的密钥流。
///
/// 相同的输入总是产生相同的输出，且较短的输出是较长输出的前缀。
pub fn generate_key_stream(password: &str, salt: &[u8], length: usize) -> Vec<u8> {
    let key_material = format!("{password}{}", hex::encode(salt));
    let mut out = Vec::with_capacity(length + 32);
    let mut counter: u64 = 0;
    while out.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(key_material.as_bytes());
        hasher.update(counter.to_string().as_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(length);
    out
}

/// 将数据与密钥流逐字节异或。对密文得到明文，对明文得到密文。
pub fn xor_key_stream(data: &[u8], key_stream: &[u8]) -> Vec<u8> {
    data.iter().zip(key_stream).map(|(a, b)| a ^ b).collect()
}
