// 設定ローダーサービス
//
// YAML設定ファイルを読み込んでConfigに変換するサービス。

use anyhow::{Context, Result};
use std::path::Path;
use std::str::FromStr;

use crate::core::config::Config;

/// 設定ローダー
pub struct ConfigLoader;

impl ConfigLoader {
    /// 指定されたパスから設定を読み込む
    ///
    /// # Errors
    ///
    /// - ファイルの読み込みに失敗した場合
    /// - YAMLの解析に失敗した場合
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Config::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// カレントディレクトリの既定の設定ファイルを読み込む
    pub fn load_default() -> Result<Config> {
        Self::from_file(Path::new(Config::DEFAULT_CONFIG_PATH))
    }
}
