// ddlコマンドハンドラー
//
// カラム定義からCREATE TABLE文を生成して表示します。
// 比較と同じ前提ゲートを通すため、検証に通らない定義からはDDLを生成しません。

use crate::cli::command_context::CommandContext;
use crate::services::ddl_generator::DdlGeneratorService;
use crate::services::definition_parser::DefinitionParserService;
use crate::services::definition_validator::DefinitionValidatorService;
use anyhow::Result;
use std::path::PathBuf;

/// ddlコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct DdlCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// カラム定義ファイルのパス（指定されない場合は設定ファイルから取得）
    pub definitions: Option<PathBuf>,
}

/// ddlコマンドハンドラー
#[derive(Debug, Clone)]
pub struct DdlCommandHandler {}

impl DdlCommandHandler {
    /// 新しいDdlCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// ddlコマンドを実行
    ///
    /// # Returns
    ///
    /// 生成されたCREATE TABLE文
    pub fn execute(&self, command: &DdlCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let definitions_path = context.require_definitions_file(command.definitions.as_deref())?;

        // 定義ファイルを解析
        let parser = DefinitionParserService::new();
        let definitions = parser.parse_file(&definitions_path)?;

        // 前提ゲート
        let validator = DefinitionValidatorService::new();
        validator.validate(&definitions)?;

        let generator = DdlGeneratorService::new();
        Ok(generator.generate_create_table(&context.config.table_ref(), &definitions))
    }
}

impl Default for DdlCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
