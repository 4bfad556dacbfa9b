// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の読み込み、検証、
// 対象テーブルおよび認証関連設定の管理を行います。

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// 検証対象テーブルの完全修飾参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// GCPプロジェクトID
    pub project: String,
    /// データセットID
    pub dataset: String,
    /// テーブルID
    pub table: String,
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.project, self.dataset, self.table)
    }
}

/// プロジェクト設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 設定ファイルのバージョン
    pub version: String,

    /// GCPプロジェクトID
    pub project: String,

    /// データセットID
    pub dataset: String,

    /// テーブルID
    pub table: String,

    /// カラム定義ファイルのパス
    #[serde(default = "default_definitions")]
    pub definitions: PathBuf,

    /// アクセストークンを読み取る環境変数名
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// データセットのロケーション（例: US, asia-northeast1）
    #[serde(default)]
    pub location: Option<String>,

    /// BigQuery REST APIエンドポイントの上書き（通常は未指定）
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_definitions() -> PathBuf {
    PathBuf::from(crate::core::naming::DEFAULT_DEFINITIONS_FILE)
}

fn default_token_env() -> String {
    crate::core::naming::DEFAULT_TOKEN_ENV.to_string()
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// 検証対象テーブルの参照を組み立てる
    pub fn table_ref(&self) -> TableRef {
        TableRef {
            project: self.project.clone(),
            dataset: self.dataset.clone(),
            table: self.table.clone(),
        }
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        // バージョンチェック
        if self.version.is_empty() {
            return Err(anyhow!("Config file version is not specified"));
        }

        if self.project.is_empty() {
            return Err(anyhow!("GCP project is not specified"));
        }

        if self.dataset.is_empty() {
            return Err(anyhow!("Dataset is not specified"));
        }

        if self.table.is_empty() {
            return Err(anyhow!("Table is not specified"));
        }

        if self.token_env.is_empty() {
            return Err(anyhow!("Token environment variable name is empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: "1.0".to_string(),
            project: String::new(),
            dataset: String::new(),
            table: String::new(),
            definitions: default_definitions(),
            token_env: default_token_env(),
            location: None,
            endpoint: None,
        }
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}
