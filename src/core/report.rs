// 比較レポートモデル
//
// スキーマ比較の結果を表現します。
// 不一致はエラーではなく判定（Verdict）として蓄積されます。

/// 検査対象プロパティ
///
/// カラムごとに検査される8つのプロパティを表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedProperty {
    /// カラムの存在
    Existence,
    /// ネイティブ型
    Type,
    /// NULL許容性
    Nullability,
    /// カラムモード
    Mode,
    /// 主キー制約
    PrimaryKey,
    /// 外部キー制約
    ForeignKey,
    /// 一意性制約
    Uniqueness,
    /// 値域制約
    Range,
}

impl std::fmt::Display for CheckedProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CheckedProperty::Existence => "Name",
            CheckedProperty::Type => "Type",
            CheckedProperty::Nullability => "Nullable",
            CheckedProperty::Mode => "Mode",
            CheckedProperty::PrimaryKey => "Primary Key",
            CheckedProperty::ForeignKey => "Foreign Key",
            CheckedProperty::Uniqueness => "Unique",
            CheckedProperty::Range => "Range",
        };
        write!(f, "{}", label)
    }
}

/// 判定
///
/// 1プロパティの比較結果です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 一致
    Ok,
    /// カラムが実テーブルに存在しない
    Missing,
    /// 期待値と実際値の不一致
    Mismatch {
        /// 期待値
        expected: String,
        /// 実際の値（カラム欠落時はNone）
        actual: Option<String>,
    },
    /// 宣言された制約が満たされていない
    Unsatisfied {
        /// 期待した制約
        expected: String,
        /// 実際の状態
        detail: String,
    },
}

impl Verdict {
    /// 一致判定かどうか
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK"),
            Verdict::Missing => write!(f, "MISSING"),
            Verdict::Mismatch { expected, actual } => match actual {
                Some(actual) => write!(f, "Expected {}, got {}", expected, actual),
                None => write!(f, "Expected {}, got None", expected),
            },
            Verdict::Unsatisfied { expected, detail } => {
                write!(f, "Expected {}, but {}", expected, detail)
            }
        }
    }
}

/// プロパティ検査結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCheck {
    /// 検査対象プロパティ
    pub property: CheckedProperty,
    /// 判定
    pub verdict: Verdict,
}

impl PropertyCheck {
    /// 新しい検査結果を作成
    pub fn new(property: CheckedProperty, verdict: Verdict) -> Self {
        Self { property, verdict }
    }
}

/// カラムレポート
///
/// 1カラム分の全検査結果を保持します。
#[derive(Debug, Clone)]
pub struct ColumnReport {
    /// カラム名
    pub column: String,
    /// 検査結果のリスト（検査順）
    pub checks: Vec<PropertyCheck>,
}

impl ColumnReport {
    /// 新しいカラムレポートを作成
    pub fn new(column: String) -> Self {
        Self {
            column,
            checks: Vec::new(),
        }
    }

    /// 検査結果を追加
    pub fn add_check(&mut self, check: PropertyCheck) {
        self.checks.push(check);
    }

    /// 全プロパティが一致したかどうか
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|check| check.verdict.is_ok())
    }

    /// 不一致の数を取得
    pub fn mismatch_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| !check.verdict.is_ok())
            .count()
    }
}

/// スキーマレポート
///
/// 全カラムの検査結果を保持します。
#[derive(Debug, Clone, Default)]
pub struct SchemaReport {
    /// カラムレポートのリスト（定義ファイルの出現順）
    pub columns: Vec<ColumnReport>,
}

impl SchemaReport {
    /// 新しいスキーマレポートを作成
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// カラムレポートを追加
    pub fn add_column(&mut self, report: ColumnReport) {
        self.columns.push(report);
    }

    /// 全カラムが一致したかどうか
    pub fn is_ok(&self) -> bool {
        self.columns.iter().all(|column| column.is_ok())
    }

    /// 検査したカラム数を取得
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 不一致の総数を取得
    pub fn mismatch_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.mismatch_count())
            .sum()
    }
}
