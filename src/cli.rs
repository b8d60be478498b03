//! 명령행 인터페이스

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kcda")]
#[command(about = "Classify Korean clinic addresses and emit normalized JSON exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// 입력 레코드 JSON 파일 (Name/name, address 필드의 배열)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// 출력 디렉터리 (없으면 만든다)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// 상세 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}
