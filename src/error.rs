use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 进程级错误（终端、配置、目录）
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot locate the user {0} directory")]
    MissingDir(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
