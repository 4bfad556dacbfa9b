// DDL生成サービス
//
// カラム定義からCREATE TABLE文を組み立てるサービス。
// 出力は参考情報であり、実行はされません。

use crate::core::config::TableRef;
use crate::core::definition::ColumnDefinition;

/// DDL生成サービス
#[derive(Debug, Clone)]
pub struct DdlGeneratorService {
    // 将来的な拡張のためのフィールドを予約
}

impl DdlGeneratorService {
    /// 新しいDdlGeneratorServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// CREATE TABLE文を生成する
    ///
    /// カラムは定義ファイルの出現順に並びます。型は宣言されたままを
    /// 出力し、ネイティブ型への変換は行いません。
    pub fn generate_create_table(
        &self,
        table: &TableRef,
        definitions: &[ColumnDefinition],
    ) -> String {
        if definitions.is_empty() {
            return format!("CREATE TABLE `{}` (\n)", table);
        }

        let columns: Vec<String> = definitions
            .iter()
            .map(|definition| format!("  {}", self.generate_column_definition(definition)))
            .collect();

        format!("CREATE TABLE `{}` (\n{}\n)", table, columns.join(",\n"))
    }

    /// カラム定義1行分を生成する
    ///
    /// NOT NULLはNULLABLEトークンの有無だけで決まります
    /// （REQUIREDの有無は見ません）。
    fn generate_column_definition(&self, definition: &ColumnDefinition) -> String {
        let mut parts = vec![definition.name.clone(), definition.declared_type.clone()];

        if !definition.declares_nullable() {
            parts.push("NOT NULL".to_string());
        }

        if definition.wants_primary_key() {
            parts.push("PRIMARY KEY".to_string());
        }

        parts.join(" ")
    }
}

impl Default for DdlGeneratorService {
    fn default() -> Self {
        Self::new()
    }
}
