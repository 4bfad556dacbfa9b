// カラム定義パーサーサービス
//
// カラム定義ファイル（1行1カラムのカンマ区切りテキスト）を読み込み、
// ColumnDefinition のリストに変換するサービス。

use crate::core::definition::ColumnDefinition;
use crate::core::error::{DefinitionError, IoError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// カラム定義パーサーサービス
///
/// 定義ファイルの読み込みと行単位の解析を行います。
#[derive(Debug, Clone)]
pub struct DefinitionParserService {
    // 将来的な拡張のためのフィールドを予約
}

impl DefinitionParserService {
    /// 新しいDefinitionParserServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 定義ファイルを読み込んで解析する
    ///
    /// # Arguments
    ///
    /// * `file_path` - カラム定義ファイルのパス
    ///
    /// # Returns
    ///
    /// ファイルの出現順を保ったカラム定義のリスト
    ///
    /// # Errors
    ///
    /// - ファイルが存在しない場合
    /// - ファイルの読み込みに失敗した場合
    /// - 行の解析に失敗した場合
    pub fn parse_file(&self, file_path: &Path) -> Result<Vec<ColumnDefinition>> {
        // ファイルの存在確認
        if !file_path.exists() {
            return Err(IoError::FileNotFound {
                path: file_path.display().to_string(),
            }
            .into());
        }

        // ファイル内容を読み込み
        let content = fs::read_to_string(file_path).map_err(|e| IoError::FileRead {
            path: file_path.display().to_string(),
            cause: e.to_string(),
        })?;

        self.parse_content(&content)
            .with_context(|| format!("Failed to parse definition file: {}", file_path.display()))
    }

    /// 定義ファイルの内容を解析する
    ///
    /// 空行（空白のみの行を含む）は位置に関わらず読み飛ばします。
    ///
    /// # Errors
    ///
    /// フィールドが2つ未満の行があった場合は `DefinitionError::Parse`
    pub fn parse_content(&self, content: &str) -> Result<Vec<ColumnDefinition>, DefinitionError> {
        let mut definitions = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if let Some(definition) = self.parse_line(index + 1, line)? {
                definitions.push(definition);
            }
        }

        Ok(definitions)
    }

    /// 1行を解析する
    ///
    /// 行全体をトリムしてからカンマで分割します。個々のフィールドは
    /// トリムせず、書かれたままを保持します（` REQUIRED` は一致しません）。
    ///
    /// # Arguments
    ///
    /// * `line_number` - 行番号（1始まり、エラー表示用）
    /// * `line` - 対象行
    ///
    /// # Returns
    ///
    /// 空行の場合は `Ok(None)`
    pub fn parse_line(
        &self,
        line_number: usize,
        line: &str,
    ) -> Result<Option<ColumnDefinition>, DefinitionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() < 2 {
            return Err(DefinitionError::Parse {
                line: line_number,
                content: trimmed.to_string(),
            });
        }

        let constraints = fields[2..].iter().map(|field| field.to_string()).collect();

        Ok(Some(ColumnDefinition::new(
            fields[0].to_string(),
            fields[1].to_string(),
            constraints,
        )))
    }
}

impl Default for DefinitionParserService {
    fn default() -> Self {
        Self::new()
    }
}
