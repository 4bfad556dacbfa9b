// validateコマンドハンドラー
//
// カラム定義ファイルの検証機能を実装します。
// - 定義ファイルの読み込みと解析
// - 重複カラム名・未知の型の検査（前提ゲートと同一）
// - 検証結果のサマリー表示
//
// ウェアハウスへのアクセスは行いません。

use crate::cli::command_context::CommandContext;
use crate::core::definition::ColumnDefinition;
use crate::services::definition_parser::DefinitionParserService;
use crate::services::definition_validator::DefinitionValidatorService;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// validateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ValidateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// カラム定義ファイルのパス（指定されない場合は設定ファイルから取得）
    pub definitions: Option<PathBuf>,
}

/// validateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ValidateCommandHandler {}

impl ValidateCommandHandler {
    /// 新しいValidateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// validateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - validateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は検証結果のサマリー、失敗時はエラーメッセージ
    pub fn execute(&self, command: &ValidateCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let definitions_path = context.require_definitions_file(command.definitions.as_deref())?;

        // 定義ファイルを解析
        let parser = DefinitionParserService::new();
        let definitions = parser.parse_file(&definitions_path)?;

        // 構造検証（最初の違反で失敗する）
        let validator = DefinitionValidatorService::new();
        validator.validate(&definitions)?;

        Ok(self.format_validation_summary(&definitions, &definitions_path))
    }

    /// 検証結果をフォーマット
    fn format_validation_summary(
        &self,
        definitions: &[ColumnDefinition],
        definitions_path: &Path,
    ) -> String {
        let mut output = String::new();

        writeln!(output, "{}", "=== Definition Validation ===".bold()).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "File: {}", definitions_path.display()).unwrap();
        writeln!(output, "Columns: {}", definitions.len()).unwrap();

        let constraint_count: usize = definitions
            .iter()
            .map(|definition| definition.constraints.len())
            .sum();
        writeln!(output, "Constraints: {}", constraint_count).unwrap();

        writeln!(output).unwrap();
        writeln!(
            output,
            "{}",
            "✓ Validation complete. No errors found.".green()
        )
        .unwrap();

        output
    }
}

impl Default for ValidateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handler() {
        let handler = ValidateCommandHandler::new();
        assert!(format!("{:?}", handler).contains("ValidateCommandHandler"));
    }

    #[test]
    fn test_format_validation_summary() {
        colored::control::set_override(false);
        let handler = ValidateCommandHandler::new();
        let definitions = vec![
            ColumnDefinition::new(
                "id".to_string(),
                "int".to_string(),
                vec!["REQUIRED".to_string(), "PK".to_string()],
            ),
            ColumnDefinition::new("name".to_string(), "str".to_string(), Vec::new()),
        ];

        let summary =
            handler.format_validation_summary(&definitions, Path::new("schema/columns.def"));

        assert!(summary.contains("Columns: 2"));
        assert!(summary.contains("Constraints: 2"));
        assert!(summary.contains("No errors found"));
    }
}
