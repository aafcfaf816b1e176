//! # duck_decode 库
//!
//! 本库包含 Duck Decode 隐写解码工具的核心逻辑。

// 声明库包含的所有模块。

pub mod binpng;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod extract;
pub mod handler;
pub mod header;
pub mod keystream;
