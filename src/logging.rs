use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// 日志目录 (~/.local/share/tally/)
fn log_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(Error::MissingDir("data"))?
        .join("tally");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn log_file_name() -> String {
    format!("tally-{}.log", Local::now().format("%Y-%m-%d"))
}

/// 初始化日志，写入文件（终端由 UI 独占）
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let path = log_dir()?.join(log_file_name());
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_is_dated() {
        let name = log_file_name();
        assert!(name.starts_with("tally-"));
        assert!(name.ends_with(".log"));
        // tally-YYYY-MM-DD.log
        assert_eq!(name.len(), "tally-2000-01-01.log".len());
    }
}
