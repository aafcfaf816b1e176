//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款隐写解码命令行工具，从图片中恢复隐藏的文件内容（支持密码保护的载荷）。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款隐写解码命令行工具，从图片 (PNG/JPG 等) 的像素低位中恢复隐藏的文件内容，支持密码保护的载荷。"
)]
pub struct Cli {
    /// 输入图像路径 (PNG/JPG 等)。
    pub input: PathBuf,

    /// 解密密码（如果需要）。
    #[arg(default_value = "")]
    pub password: String,

    /// 输出目录 (默认: 当前目录)。
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// 显示详细信息。
    #[arg(short, long)]
    pub verbose: bool,
}
