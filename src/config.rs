use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// 配置文件结构 (config.toml)，所有字段均可省略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub presentation: PresentationConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub fullscreen: bool, // 进入电视模式时请求终端全屏
    pub card_width: u16,  // 网格中每列的最小宽度
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "WHO'S JOKING?".to_string(),
            presentation: PresentationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            fullscreen: true,
            card_width: 32,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 配置文件路径 (~/.config/tally/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(Error::MissingDir("config"))?;
    Ok(dir.join("tally").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    // 宽度为 0 时网格无法排布
    config.presentation.card_width = config.presentation.card_width.max(1);
    Ok(config)
}
