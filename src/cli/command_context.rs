// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// プロジェクトルートから設定を読み込んでコンテキストを作成
    ///
    /// `--config` で設定ファイルのパスを上書きできます。
    pub fn load(project_path: PathBuf, config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(path) => path,
            None => project_path.join(Config::DEFAULT_CONFIG_PATH),
        };

        if !config_path.exists() {
            return Err(anyhow!(
                "Config file not found: {:?}. Please initialize the project first with the `init` command.",
                config_path
            ));
        }

        let config =
            ConfigLoader::from_file(&config_path).with_context(|| "Failed to read config file")?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// カラム定義ファイルの絶対パス
    ///
    /// コマンドラインで指定されたパスが設定より優先されます。
    pub fn definitions_path(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => self.project_path.join(path),
            None => self.project_path.join(&self.config.definitions),
        }
    }

    /// カラム定義ファイルが存在することを確認して返す
    pub fn require_definitions_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        let path = self.definitions_path(override_path);
        if !path.exists() {
            return Err(anyhow!("Definitions file not found: {:?}", path));
        }
        Ok(path)
    }
}
