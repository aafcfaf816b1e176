//! # 命令处理逻辑模块
//!
//! 包含解码命令的高级业务逻辑。
//! 本模块负责加载输入图像、调用核心解码流程以及向用户报告结果。

use crate::cli::Cli;
use crate::decoder;
use anyhow::{Context, Result};
use colored::Colorize;

/// 处理解码命令的执行逻辑。
///
/// 负责校验输入文件、把图像解码为 RGB 像素缓冲、调用解码编排器，
/// 最后向用户打印恢复文件的路径、类型与大小。
///
/// # Arguments
///
/// * `args` - 包含输入路径、密码与输出目录的 `Cli` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入图像不存在或无法解码为像素缓冲。
/// * 图像中没有可识别的隐写载荷，或密码缺失/错误。
/// * 无法创建输出目录或写入恢复的文件。
pub fn handle_decode(args: Cli) -> Result<()> {
    anyhow::ensure!(
        args.input.is_file(),
        "Input file not found: {}",
        args.input.to_string_lossy().red().bold()
    );

    if args.verbose {
        println!("输入文件: {}", args.input.to_string_lossy());
        println!("密码: {}", if args.password.is_empty() { "无" } else { "已设置" });
        println!("输出目录: {}", args.output.to_string_lossy());
        println!("{}", "-".repeat(50));
    }

    let img = image::open(&args.input)
        .with_context(|| {
            format!(
                "Unable to decode input image: {}",
                args.input.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let mut report = |message: &str| {
        if args.verbose {
            println!("{message}");
        }
    };

    let artifact = decoder::decode(&img, &args.password, &args.output, Some(&mut report))
        .with_context(|| {
            format!(
                "Failed to decode hidden payload from '{}'.",
                args.input.to_string_lossy().red().bold()
            )
        })?;

    println!("{}", "Decoding successful! / 解码成功!".green().bold());
    println!("输出文件: {}", artifact.path.to_string_lossy().green().bold());
    println!("文件类型: {}", artifact.extension);
    println!("文件大小: {}", artifact.size);

    Ok(())
}
