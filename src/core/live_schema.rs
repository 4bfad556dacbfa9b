// ライブスキーマモデル
//
// BigQueryから取得したテーブルスキーマを表現するドメインモデルを提供します。

use std::collections::HashMap;
use std::str::FromStr;

/// カラムモード
///
/// BigQueryのカラムモード（REQUIRED / NULLABLE / REPEATED）を表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMode {
    Required,
    Nullable,
    Repeated,
}

impl std::fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnMode::Required => write!(f, "REQUIRED"),
            ColumnMode::Nullable => write!(f, "NULLABLE"),
            ColumnMode::Repeated => write!(f, "REPEATED"),
        }
    }
}

impl FromStr for ColumnMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUIRED" => Ok(ColumnMode::Required),
            "NULLABLE" => Ok(ColumnMode::Nullable),
            "REPEATED" => Ok(ColumnMode::Repeated),
            other => Err(format!("unknown column mode: {}", other)),
        }
    }
}

/// ライブカラム
///
/// テーブルに実在するカラム1つ分のスキーマ情報です。
/// `is_nullable` はモードから導出され、NULLABLEの場合のみtrueになります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveColumn {
    /// カラム名
    pub name: String,
    /// BigQueryネイティブ型名（大文字）
    pub native_type: String,
    /// カラムモード
    pub mode: ColumnMode,
    /// NULL許容かどうか
    pub is_nullable: bool,
}

impl LiveColumn {
    /// 新しいライブカラムを作成
    ///
    /// NULL許容性はモードから導出します。
    pub fn new(name: String, native_type: String, mode: ColumnMode) -> Self {
        Self {
            name,
            native_type,
            is_nullable: mode == ColumnMode::Nullable,
            mode,
        }
    }
}

/// ライブスキーマ
///
/// テーブルの全カラムをカラム名で引けるように保持します。
#[derive(Debug, Clone, Default)]
pub struct LiveSchema {
    columns: HashMap<String, LiveColumn>,
}

impl LiveSchema {
    /// カラムのリストからライブスキーマを構築
    pub fn from_columns(columns: Vec<LiveColumn>) -> Self {
        let columns = columns
            .into_iter()
            .map(|column| (column.name.clone(), column))
            .collect();
        Self { columns }
    }

    /// カラムを名前で取得
    pub fn get(&self, name: &str) -> Option<&LiveColumn> {
        self.columns.get(name)
    }

    /// カラムが存在するかどうか
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// カラム数を取得
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// カラムが1つも無いかどうか
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mode_display() {
        assert_eq!(ColumnMode::Required.to_string(), "REQUIRED");
        assert_eq!(ColumnMode::Nullable.to_string(), "NULLABLE");
        assert_eq!(ColumnMode::Repeated.to_string(), "REPEATED");
    }

    #[test]
    fn test_column_mode_from_str() {
        assert_eq!(
            ColumnMode::from_str("REQUIRED").unwrap(),
            ColumnMode::Required
        );
        assert_eq!(
            ColumnMode::from_str("NULLABLE").unwrap(),
            ColumnMode::Nullable
        );
        assert_eq!(
            ColumnMode::from_str("REPEATED").unwrap(),
            ColumnMode::Repeated
        );

        // 小文字や未知のトークンは受け付けない
        assert!(ColumnMode::from_str("nullable").is_err());
        assert!(ColumnMode::from_str("OPTIONAL").is_err());
    }

    #[test]
    fn test_live_column_nullability_derived_from_mode() {
        let nullable = LiveColumn::new("a".to_string(), "STRING".to_string(), ColumnMode::Nullable);
        assert!(nullable.is_nullable);

        let required = LiveColumn::new("b".to_string(), "STRING".to_string(), ColumnMode::Required);
        assert!(!required.is_nullable);

        let repeated = LiveColumn::new("c".to_string(), "STRING".to_string(), ColumnMode::Repeated);
        assert!(!repeated.is_nullable);
    }

    #[test]
    fn test_live_schema_lookup() {
        let schema = LiveSchema::from_columns(vec![
            LiveColumn::new("id".to_string(), "INTEGER".to_string(), ColumnMode::Required),
            LiveColumn::new("name".to_string(), "STRING".to_string(), ColumnMode::Nullable),
        ]);

        assert_eq!(schema.column_count(), 2);
        assert!(schema.contains("id"));
        assert!(!schema.contains("missing"));
        assert_eq!(schema.get("name").unwrap().native_type, "STRING");
        assert!(schema.get("missing").is_none());
    }

    #[test]
    fn test_live_schema_empty() {
        let schema = LiveSchema::from_columns(Vec::new());

        assert!(schema.is_empty());
        assert_eq!(schema.column_count(), 0);
    }
}
