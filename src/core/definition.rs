// カラム定義モデル
//
// 定義ファイルの1行を表現するドメインモデルを提供します。
// フィールドはファイルに書かれたままを保持し、解釈はアクセサ側で行います。

use crate::core::error::DefinitionError;
use crate::core::live_schema::ColumnMode;

/// RANGE制約の境界値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    /// 下限（両端を含む）
    pub min: i64,
    /// 上限（両端を含む）
    pub max: i64,
}

/// カラム定義
///
/// 定義ファイルの1行に対応します。
/// `name,type[,constraint...]` の各フィールドを無加工で保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// カラム名
    pub name: String,
    /// 宣言された型（ファイル内の表記のまま）
    pub declared_type: String,
    /// 制約トークンのリスト（出現順）
    pub constraints: Vec<String>,
}

impl ColumnDefinition {
    /// 新しいカラム定義を作成
    pub fn new(name: String, declared_type: String, constraints: Vec<String>) -> Self {
        Self {
            name,
            declared_type,
            constraints,
        }
    }

    /// 指定された制約トークンを持つかどうか（完全一致）
    pub fn has_constraint(&self, token: &str) -> bool {
        self.constraints.iter().any(|c| c == token)
    }

    /// REQUIRED制約が宣言されているかどうか
    pub fn is_required(&self) -> bool {
        self.has_constraint("REQUIRED")
    }

    /// REPEATED制約が宣言されているかどうか
    pub fn is_repeated(&self) -> bool {
        self.has_constraint("REPEATED")
    }

    /// NULLABLE制約が明示されているかどうか
    ///
    /// DDL生成のNOT NULL判定はこのトークンの有無のみで決まります。
    pub fn declares_nullable(&self) -> bool {
        self.has_constraint("NULLABLE")
    }

    /// PK制約が宣言されているかどうか
    pub fn wants_primary_key(&self) -> bool {
        self.has_constraint("PK")
    }

    /// FK制約が宣言されているかどうか
    pub fn wants_foreign_key(&self) -> bool {
        self.has_constraint("FK")
    }

    /// UNIQUE制約が宣言されているかどうか
    pub fn wants_unique(&self) -> bool {
        self.has_constraint("UNIQUE")
    }

    /// 期待されるNULL許容性
    ///
    /// REQUIREDが宣言されていない限りNULL許容と期待します。
    pub fn expected_nullable(&self) -> bool {
        !self.is_required()
    }

    /// 期待されるカラムモード
    ///
    /// REPEATEDが最優先。それ以外はREQUIREDの有無でNULLABLE/REQUIREDに分かれます。
    pub fn expected_mode(&self) -> ColumnMode {
        if self.is_repeated() {
            ColumnMode::Repeated
        } else if self.expected_nullable() {
            ColumnMode::Nullable
        } else {
            ColumnMode::Required
        }
    }

    /// RANGE制約の境界値を解析
    ///
    /// `RANGE` で始まる最初の制約トークンを対象とします。
    /// 先頭トークンの後に整数がちょうど2つ続かない場合はエラーです。
    ///
    /// # Returns
    /// RANGE制約が無い場合は `Ok(None)`
    ///
    /// # Errors
    /// 境界値が解析できない場合は `DefinitionError::InvalidRange`
    pub fn range_bounds(&self) -> Result<Option<RangeBounds>, DefinitionError> {
        let token = match self.constraints.iter().find(|c| c.starts_with("RANGE")) {
            Some(token) => token,
            None => return Ok(None),
        };

        let invalid = || DefinitionError::InvalidRange {
            column: self.name.clone(),
            token: token.clone(),
        };

        // 単一スペース区切り。連続スペースは空フィールドになり解析失敗とする
        let parts: Vec<&str> = token.split(' ').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let min = parts[1].parse::<i64>().map_err(|_| invalid())?;
        let max = parts[2].parse::<i64>().map_err(|_| invalid())?;

        Ok(Some(RangeBounds { min, max }))
    }
}
