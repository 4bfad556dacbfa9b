// カラム定義バリデーターサービス
//
// 解析済みのカラム定義に対する構造検証を行うサービス。
// 比較やDDL生成の前提ゲートとして、最初の違反で即座に失敗します。

use std::collections::HashSet;

use crate::core::definition::ColumnDefinition;
use crate::core::error::DefinitionError;
use crate::services::type_mapper::TypeMapperService;

/// カラム定義バリデーターサービス
///
/// カラム名の重複と宣言型の妥当性を検査します。
#[derive(Debug, Clone)]
pub struct DefinitionValidatorService {
    type_mapper: TypeMapperService,
}

impl DefinitionValidatorService {
    /// 新しいDefinitionValidatorServiceを作成
    pub fn new() -> Self {
        Self {
            type_mapper: TypeMapperService::new(),
        }
    }

    /// カラム定義のリストを検証する
    ///
    /// ファイルの出現順に走査し、定義ごとに重複チェック、型チェックの順で
    /// 検査します。最初の違反を返して打ち切るため、エラーは常に1件です。
    ///
    /// # Errors
    ///
    /// - 同名のカラムが再登場した場合は `DefinitionError::DuplicateColumn`
    /// - 変換後の型が既知のネイティブ型でない場合は `DefinitionError::InvalidType`
    pub fn validate(&self, definitions: &[ColumnDefinition]) -> Result<(), DefinitionError> {
        let mut seen: HashSet<&str> = HashSet::new();

        for definition in definitions {
            if !seen.insert(definition.name.as_str()) {
                return Err(DefinitionError::DuplicateColumn {
                    name: definition.name.clone(),
                });
            }

            let native_type = self.type_mapper.map(&definition.declared_type);
            if !self.type_mapper.is_known_native_type(&native_type) {
                return Err(DefinitionError::InvalidType {
                    column: definition.name.clone(),
                    declared: definition.declared_type.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for DefinitionValidatorService {
    fn default() -> Self {
        Self::new()
    }
}
