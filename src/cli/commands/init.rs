// initコマンドハンドラー
//
// プロジェクトの初期化処理を実装します。
// - ディレクトリ構造の作成（schema/）
// - デフォルト設定ファイルの生成（.bqcheck.yaml）
// - サンプルカラム定義ファイルの生成
// - 初期化済みプロジェクトの検出と警告

use crate::core::config::Config;
use crate::core::error::IoError;
use crate::core::naming;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 初期化時に生成されるサンプルのカラム定義
const SAMPLE_DEFINITIONS: &str = "id,int,REQUIRED,PK
name,str,NULLABLE
age,int,RANGE 0 120
tags,str,REPEATED
created_at,datetime,REQUIRED
";

/// initコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct InitCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 強制的に初期化（既存の設定を上書き）
    pub force: bool,
}

/// initコマンドハンドラー
#[derive(Debug, Clone)]
pub struct InitCommandHandler {}

impl InitCommandHandler {
    /// 新しいInitCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// initコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - initコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時はOk(())、失敗時はエラーメッセージ
    pub fn execute(&self, command: &InitCommand) -> Result<()> {
        // 初期化済みチェック
        if self.is_already_initialized(&command.project_path) && !command.force {
            return Err(anyhow!(
                "Project is already initialized. Use --force option to force re-initialization."
            ));
        }

        // ディレクトリ構造を作成
        self.create_directory_structure(&command.project_path)?;

        // 設定ファイルを生成
        self.generate_config_file(&command.project_path)?;

        // サンプルのカラム定義ファイルを生成
        self.generate_sample_definitions(&command.project_path, command.force)?;

        Ok(())
    }

    /// プロジェクトが既に初期化されているかチェック
    ///
    /// # Arguments
    ///
    /// * `project_path` - プロジェクトのルートパス
    ///
    /// # Returns
    ///
    /// 初期化済みならtrue
    pub fn is_already_initialized(&self, project_path: &Path) -> bool {
        let config_path = project_path.join(Config::DEFAULT_CONFIG_PATH);
        config_path.exists()
    }

    /// ディレクトリ構造を作成
    ///
    /// # Arguments
    ///
    /// * `project_path` - プロジェクトのルートパス
    pub fn create_directory_structure(&self, project_path: &Path) -> Result<()> {
        // schema/ディレクトリを作成
        let schema_dir = project_path.join("schema");
        fs::create_dir_all(&schema_dir).map_err(|e| IoError::DirectoryCreate {
            path: schema_dir.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }

    /// 設定ファイルを生成
    ///
    /// # Arguments
    ///
    /// * `project_path` - プロジェクトのルートパス
    pub fn generate_config_file(&self, project_path: &Path) -> Result<()> {
        // プレースホルダー値で設定オブジェクトを作成
        let config = Config {
            version: "1.0".to_string(),
            project: "my-project".to_string(),
            dataset: "my_dataset".to_string(),
            table: "my_table".to_string(),
            ..Config::default()
        };

        // YAMLにシリアライズ
        let yaml =
            serde_saphyr::to_string(&config).with_context(|| "Failed to serialize config file")?;

        // ファイルに書き込み
        let config_path = project_path.join(Config::DEFAULT_CONFIG_PATH);
        fs::write(&config_path, yaml).map_err(|e| IoError::FileWrite {
            path: config_path.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }

    /// サンプルのカラム定義ファイルを生成
    ///
    /// 既存の定義ファイルは--forceが指定されない限り上書きしません。
    fn generate_sample_definitions(&self, project_path: &Path, force: bool) -> Result<()> {
        let definitions_path = project_path.join(naming::DEFAULT_DEFINITIONS_FILE);
        if definitions_path.exists() && !force {
            return Ok(());
        }

        fs::write(&definitions_path, SAMPLE_DEFINITIONS).map_err(|e| IoError::FileWrite {
            path: definitions_path.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for InitCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
