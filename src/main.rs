use clap::Parser;

use duck_decode::{cli::Cli, handler::handle_decode};

/// 程序的主入口点
///
/// 负责解析命令行参数，并把执行分派到解码处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    handle_decode(cli)
}
