// checkコマンドハンドラー
//
// スキーマ照合機能を実装します。
// - カラム定義ファイルの解析と検証（前提ゲート）
// - BigQueryからのライブスキーマ取得
// - カラム単位・プロパティ単位の照合とレポート表示
// - CREATE TABLE文の生成

use crate::adapters::bigquery::BigQueryClient;
use crate::adapters::warehouse::Warehouse;
use crate::cli::command_context::CommandContext;
use crate::core::config::TableRef;
use crate::core::live_schema::LiveSchema;
use crate::core::report::SchemaReport;
use crate::services::ddl_generator::DdlGeneratorService;
use crate::services::definition_parser::DefinitionParserService;
use crate::services::definition_validator::DefinitionValidatorService;
use crate::services::schema_comparator::SchemaComparatorService;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::fmt::Write;
use std::path::PathBuf;
use tracing::info;

/// checkコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// カラム定義ファイルのパス（指定されない場合は設定ファイルから取得）
    pub definitions: Option<PathBuf>,
}

/// checkコマンドハンドラー
#[derive(Debug, Clone)]
pub struct CheckCommandHandler {}

impl CheckCommandHandler {
    /// 新しいCheckCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// checkコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - checkコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は照合レポート、失敗時はエラーメッセージ
    pub async fn execute(&self, command: &CheckCommand) -> Result<String> {
        // 設定ファイルを読み込む
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;

        // BigQueryクライアントを構築
        let client = BigQueryClient::from_config(&context.config)
            .with_context(|| "Failed to build BigQuery client")?;

        self.execute_with_warehouse(command, &context, &client)
            .await
    }

    /// 指定されたウェアハウスに対してcheckコマンドを実行
    ///
    /// 照合の流れ:
    /// 1. カラム定義ファイルを解析
    /// 2. 定義を検証（検証に失敗した場合は照合を行わない）
    /// 3. ライブスキーマを取得
    /// 4. カラムごとに照合
    /// 5. CREATE TABLE文を生成してレポートにまとめる
    ///
    /// 不一致はレポートに記録されるだけで、エラーにはなりません。
    pub async fn execute_with_warehouse(
        &self,
        command: &CheckCommand,
        context: &CommandContext,
        warehouse: &dyn Warehouse,
    ) -> Result<String> {
        let definitions_path = context.require_definitions_file(command.definitions.as_deref())?;

        // 定義ファイルを解析
        let parser = DefinitionParserService::new();
        let definitions = parser.parse_file(&definitions_path)?;

        // 前提ゲート: 不正な定義では照合しない
        let validator = DefinitionValidatorService::new();
        validator.validate(&definitions)?;

        let table_ref = context.config.table_ref();
        info!(table = %table_ref, columns = definitions.len(), "checking table schema");

        // ライブスキーマを取得
        let columns = warehouse
            .fetch_table_schema(&table_ref)
            .await
            .with_context(|| format!("Failed to fetch schema for table: {}", table_ref))?;
        let live_schema = LiveSchema::from_columns(columns);

        // カラムごとに照合
        let comparator = SchemaComparatorService::new();
        let report = comparator
            .compare(&table_ref, &definitions, &live_schema, warehouse)
            .await?;

        // CREATE TABLE文を生成
        let generator = DdlGeneratorService::new();
        let ddl = generator.generate_create_table(&table_ref, &definitions);

        Ok(self.format_check_report(&table_ref, &report, &ddl))
    }

    /// 照合レポートをフォーマット
    fn format_check_report(&self, table: &TableRef, report: &SchemaReport, ddl: &str) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "{}",
            format!("=== Schema Check: {} ===", table).bold()
        )
        .unwrap();
        writeln!(
            output,
            "{}",
            format!(
                "Checked at: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            )
            .dimmed()
        )
        .unwrap();
        writeln!(output).unwrap();

        // カラムごとの判定
        for column in &report.columns {
            writeln!(output, "Column: {}", column.column.cyan()).unwrap();
            for check in &column.checks {
                let line = format!("  - {}: {}", check.property, check.verdict);
                if check.verdict.is_ok() {
                    writeln!(output, "{}", line.green()).unwrap();
                } else {
                    writeln!(output, "{}", line.red()).unwrap();
                }
            }
            writeln!(output).unwrap();
        }

        writeln!(output, "{}", "=== Generated DDL ===".bold()).unwrap();
        writeln!(output, "{}", ddl).unwrap();
        writeln!(output).unwrap();

        // サマリー
        writeln!(output, "{}", "=== Summary ===".bold()).unwrap();
        writeln!(output, "Columns checked: {}", report.column_count()).unwrap();
        writeln!(output, "Mismatches: {}", report.mismatch_count()).unwrap();
        if report.is_ok() {
            writeln!(
                output,
                "{}",
                "✓ Table schema matches the column definitions.".green()
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "{}",
                format!(
                    "✗ {} propert{} did not match the column definitions.",
                    report.mismatch_count(),
                    if report.mismatch_count() == 1 { "y" } else { "ies" }
                )
                .red()
            )
            .unwrap();
        }

        output
    }
}

impl Default for CheckCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
