// スキーマ比較サービス
//
// カラム定義とライブスキーマをカラム単位・プロパティ単位で突き合わせるサービス。
// 構造プロパティはローカルで比較し、宣言された制約はウェアハウスへの
// プローブクエリで確認します。
//
// 不一致は判定としてレポートに積まれ、処理は継続します。
// プローブの実行失敗だけが処理全体を打ち切ります。

use anyhow::Result;
use tracing::debug;

use crate::adapters::warehouse::Warehouse;
use crate::core::config::TableRef;
use crate::core::definition::{ColumnDefinition, RangeBounds};
use crate::core::error::WarehouseError;
use crate::core::live_schema::{LiveColumn, LiveSchema};
use crate::core::report::{CheckedProperty, ColumnReport, PropertyCheck, SchemaReport, Verdict};
use crate::services::type_mapper::TypeMapperService;

/// スキーマ比較サービス
#[derive(Debug, Clone)]
pub struct SchemaComparatorService {
    type_mapper: TypeMapperService,
}

impl SchemaComparatorService {
    /// 新しいSchemaComparatorServiceを作成
    pub fn new() -> Self {
        Self {
            type_mapper: TypeMapperService::new(),
        }
    }

    /// 全カラム定義をライブスキーマと比較する
    ///
    /// 定義ファイルの出現順にカラムを処理し、カラムごとのレポートを
    /// 積み上げます。カラムの欠落や不一致では停止しません。
    ///
    /// # Errors
    ///
    /// - プローブクエリの実行に失敗した場合
    /// - RANGE制約の境界値が解析できない場合
    pub async fn compare(
        &self,
        table: &TableRef,
        definitions: &[ColumnDefinition],
        live: &LiveSchema,
        warehouse: &dyn Warehouse,
    ) -> Result<SchemaReport> {
        let mut report = SchemaReport::new();

        for definition in definitions {
            let column_report = self
                .compare_column(table, definition, live, warehouse)
                .await?;
            report.add_column(column_report);
        }

        Ok(report)
    }

    /// 1カラム分の比較を行う
    ///
    /// 構造プロパティ（存在・型・NULL許容性・モード）を常に検査し、
    /// 宣言された制約（PK・FK・UNIQUE・RANGE）はこの順でプローブします。
    pub async fn compare_column(
        &self,
        table: &TableRef,
        definition: &ColumnDefinition,
        live: &LiveSchema,
        warehouse: &dyn Warehouse,
    ) -> Result<ColumnReport> {
        let live_column = live.get(&definition.name);

        let mut report = ColumnReport::new(definition.name.clone());
        report.add_check(self.check_existence(live_column));
        report.add_check(self.check_type(definition, live_column));
        report.add_check(self.check_nullability(definition, live_column));
        report.add_check(self.check_mode(definition, live_column));

        if definition.wants_primary_key() {
            report.add_check(
                self.check_primary_key(warehouse, table, &definition.name)
                    .await?,
            );
        }

        if definition.wants_foreign_key() {
            report.add_check(
                self.check_foreign_key(warehouse, table, &definition.name)
                    .await?,
            );
        }

        if definition.wants_unique() {
            report.add_check(
                self.check_uniqueness(warehouse, table, &definition.name)
                    .await?,
            );
        }

        if let Some(bounds) = definition.range_bounds()? {
            report.add_check(
                self.check_range(warehouse, table, &definition.name, bounds)
                    .await?,
            );
        }

        debug!(
            column = %definition.name,
            mismatches = report.mismatch_count(),
            "column compared"
        );

        Ok(report)
    }

    // --- 構造プロパティの比較 ---

    /// カラムの存在を検査
    pub fn check_existence(&self, live_column: Option<&LiveColumn>) -> PropertyCheck {
        let verdict = if live_column.is_some() {
            Verdict::Ok
        } else {
            Verdict::Missing
        };

        PropertyCheck::new(CheckedProperty::Existence, verdict)
    }

    /// ネイティブ型を検査
    ///
    /// 宣言型を変換した結果と実際の型名を大文字小文字込みで比較します。
    pub fn check_type(
        &self,
        definition: &ColumnDefinition,
        live_column: Option<&LiveColumn>,
    ) -> PropertyCheck {
        let expected = self.type_mapper.map(&definition.declared_type);

        let verdict = match live_column {
            Some(column) if column.native_type == expected => Verdict::Ok,
            Some(column) => Verdict::Mismatch {
                expected,
                actual: Some(column.native_type.clone()),
            },
            None => Verdict::Mismatch {
                expected,
                actual: None,
            },
        };

        PropertyCheck::new(CheckedProperty::Type, verdict)
    }

    /// NULL許容性を検査
    pub fn check_nullability(
        &self,
        definition: &ColumnDefinition,
        live_column: Option<&LiveColumn>,
    ) -> PropertyCheck {
        let expected = definition.expected_nullable();

        let verdict = match live_column {
            Some(column) if column.is_nullable == expected => Verdict::Ok,
            Some(column) => Verdict::Mismatch {
                expected: expected.to_string(),
                actual: Some(column.is_nullable.to_string()),
            },
            None => Verdict::Mismatch {
                expected: expected.to_string(),
                actual: None,
            },
        };

        PropertyCheck::new(CheckedProperty::Nullability, verdict)
    }

    /// カラムモードを検査
    pub fn check_mode(
        &self,
        definition: &ColumnDefinition,
        live_column: Option<&LiveColumn>,
    ) -> PropertyCheck {
        let expected = definition.expected_mode();

        let verdict = match live_column {
            Some(column) if column.mode == expected => Verdict::Ok,
            Some(column) => Verdict::Mismatch {
                expected: expected.to_string(),
                actual: Some(column.mode.to_string()),
            },
            None => Verdict::Mismatch {
                expected: expected.to_string(),
                actual: None,
            },
        };

        PropertyCheck::new(CheckedProperty::Mode, verdict)
    }

    // --- 制約プローブSQL生成 ---

    /// 主キー確認クエリを生成
    pub fn generate_primary_key_check_sql(&self, table: &TableRef, column: &str) -> String {
        format!(
            "SELECT 1 FROM {}.INFORMATION_SCHEMA.COLUMNS WHERE table_name = '{}' AND column_name = '{}' AND is_primary_key = 'YES'",
            table.dataset, table.table, column
        )
    }

    /// 外部キー確認クエリを生成
    ///
    /// COLUMN_FIELD_PATHSにカラムが載っていることしか確認できない
    /// （参照整合性は見ない）。
    pub fn generate_foreign_key_check_sql(&self, table: &TableRef, column: &str) -> String {
        format!(
            "SELECT 1 FROM {}.INFORMATION_SCHEMA.COLUMN_FIELD_PATHS WHERE table_name = '{}' AND column_name = '{}'",
            table.dataset, table.table, column
        )
    }

    /// 一意性確認クエリを生成
    pub fn generate_uniqueness_check_sql(&self, table: &TableRef, column: &str) -> String {
        format!(
            "SELECT COUNT(DISTINCT {}) = COUNT(*) AS is_unique FROM `{}`",
            column, table
        )
    }

    /// 値域確認クエリを生成
    ///
    /// 両端を含む範囲を1クエリで検査します。
    pub fn generate_range_check_sql(
        &self,
        table: &TableRef,
        column: &str,
        bounds: RangeBounds,
    ) -> String {
        format!(
            "SELECT MIN({}) >= {} AND MAX({}) <= {} AS in_range FROM `{}`",
            column, bounds.min, column, bounds.max, table
        )
    }

    // --- 制約プローブ実行 ---

    /// 主キー制約をプローブ
    ///
    /// 行が1件でも返れば主キーとみなします。
    async fn check_primary_key(
        &self,
        warehouse: &dyn Warehouse,
        table: &TableRef,
        column: &str,
    ) -> Result<PropertyCheck, WarehouseError> {
        let sql = self.generate_primary_key_check_sql(table, column);
        let rows = warehouse.run_query(&sql).await?;

        let verdict = if rows.is_empty() {
            Verdict::Unsatisfied {
                expected: "PK".to_string(),
                detail: "not a PK".to_string(),
            }
        } else {
            Verdict::Ok
        };

        Ok(PropertyCheck::new(CheckedProperty::PrimaryKey, verdict))
    }

    /// 外部キー制約をプローブ
    async fn check_foreign_key(
        &self,
        warehouse: &dyn Warehouse,
        table: &TableRef,
        column: &str,
    ) -> Result<PropertyCheck, WarehouseError> {
        let sql = self.generate_foreign_key_check_sql(table, column);
        let rows = warehouse.run_query(&sql).await?;

        let verdict = if rows.is_empty() {
            Verdict::Unsatisfied {
                expected: "FK".to_string(),
                detail: "not an FK".to_string(),
            }
        } else {
            Verdict::Ok
        };

        Ok(PropertyCheck::new(CheckedProperty::ForeignKey, verdict))
    }

    /// 一意性制約をプローブ
    ///
    /// クエリが返す真偽値スカラーをそのまま判定に使います。
    async fn check_uniqueness(
        &self,
        warehouse: &dyn Warehouse,
        table: &TableRef,
        column: &str,
    ) -> Result<PropertyCheck, WarehouseError> {
        let sql = self.generate_uniqueness_check_sql(table, column);
        let rows = warehouse.run_query(&sql).await?;

        let is_unique = rows.scalar_bool(0, 0).ok_or_else(|| WarehouseError::Query {
            message: "uniqueness check did not return a boolean scalar".to_string(),
            sql: Some(sql.clone()),
        })?;

        let verdict = if is_unique {
            Verdict::Ok
        } else {
            Verdict::Unsatisfied {
                expected: "UNIQUE".to_string(),
                detail: "has duplicates".to_string(),
            }
        };

        Ok(PropertyCheck::new(CheckedProperty::Uniqueness, verdict))
    }

    /// 値域制約をプローブ
    async fn check_range(
        &self,
        warehouse: &dyn Warehouse,
        table: &TableRef,
        column: &str,
        bounds: RangeBounds,
    ) -> Result<PropertyCheck, WarehouseError> {
        let sql = self.generate_range_check_sql(table, column, bounds);
        let rows = warehouse.run_query(&sql).await?;

        let in_range = rows.scalar_bool(0, 0).ok_or_else(|| WarehouseError::Query {
            message: "range check did not return a boolean scalar".to_string(),
            sql: Some(sql.clone()),
        })?;

        let verdict = if in_range {
            Verdict::Ok
        } else {
            Verdict::Unsatisfied {
                expected: format!("range {} to {}", bounds.min, bounds.max),
                detail: "values are outside this range".to_string(),
            }
        };

        Ok(PropertyCheck::new(CheckedProperty::Range, verdict))
    }
}

impl Default for SchemaComparatorService {
    fn default() -> Self {
        Self::new()
    }
}
