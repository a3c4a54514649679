use anyhow::{bail, Context, Result};
use pmc_scrubber::{logger, App, Config};
use std::path::{Path, PathBuf};

const USAGE: &str = "用法:\n  pmc_scrubber <语料目录>\n  pmc_scrubber --file <文章路径> [输出目录]";

enum Command {
    Corpus(PathBuf),
    File(PathBuf, Option<PathBuf>),
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [flag, path] if flag == "--file" => Ok(Command::File(path.into(), None)),
        [flag, path, output_dir] if flag == "--file" => {
            Ok(Command::File(path.into(), Some(output_dir.into())))
        }
        [corpus_dir] if !corpus_dir.starts_with("--") => Ok(Command::Corpus(corpus_dir.into())),
        _ => bail!("{}", USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    // 加载配置
    let config = match std::env::var("SCRUB_CONFIG") {
        Ok(path) => Config::from_toml_file(Path::new(&path))
            .with_context(|| format!("无法加载配置文件: {}", path))?,
        Err(_) => Config::from_env()?,
    };

    // 初始化并运行应用
    let app = App::initialize(config)?;
    match command {
        Command::Corpus(corpus_dir) => {
            app.scrub_corpus(&corpus_dir).await?;
        }
        Command::File(path, output_dir) => {
            app.scrub_file(&path, output_dir.as_deref()).await?;
        }
    }

    Ok(())
}
