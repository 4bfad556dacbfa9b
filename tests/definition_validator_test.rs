/// カラム定義バリデーターのテスト
///
/// 前提ゲートとしての振る舞い（最初の違反で打ち切り、エラーは常に1件）を
/// 公開APIから確認します。
use bqcheck::core::definition::ColumnDefinition;
use bqcheck::services::definition_validator::DefinitionValidatorService;

/// テスト用のカラム定義作成ヘルパー
fn definition(name: &str, declared_type: &str) -> ColumnDefinition {
    ColumnDefinition::new(name.to_string(), declared_type.to_string(), Vec::new())
}

/// エイリアス型とネイティブ型が混在する現実的な定義を受理する
#[test]
fn test_validate_accepts_realistic_definitions() {
    let definitions = vec![
        definition("id", "int"),
        definition("name", "str"),
        definition("created_at", "datetime"),
        definition("payload", "list"),
        definition("score", "FLOAT"),
        definition("active", "BOOLEAN"),
        definition("amount", "NUMERIC"),
        definition("location", "GEOGRAPHY"),
    ];

    let validator = DefinitionValidatorService::new();
    assert!(validator.validate(&definitions).is_ok());
}

/// エラーメッセージには宣言された型が書かれたまま現れる
#[test]
fn test_invalid_type_message_uses_declared_type_verbatim() {
    let definitions = vec![definition("age", "nuber")];

    let validator = DefinitionValidatorService::new();
    let error = validator.validate(&definitions).unwrap_err();

    assert!(error.is_invalid_type());
    assert_eq!(
        error.to_string(),
        "Invalid data type 'nuber' for column 'age'"
    );
}

#[test]
fn test_duplicate_column_message() {
    let definitions = vec![
        definition("id", "int"),
        definition("name", "str"),
        definition("id", "str"),
    ];

    let validator = DefinitionValidatorService::new();
    let error = validator.validate(&definitions).unwrap_err();

    assert!(error.is_duplicate_column());
    assert_eq!(error.to_string(), "Duplicate column name: id");
}

/// 同じ定義行で重複と型不正が同時に起きた場合は重複が優先される
#[test]
fn test_duplicate_wins_over_type_on_same_definition() {
    let definitions = vec![definition("id", "int"), definition("id", "nuber")];

    let validator = DefinitionValidatorService::new();
    let error = validator.validate(&definitions).unwrap_err();

    assert!(error.is_duplicate_column());
}

/// 宣言型は大文字小文字を区別せずに解決される
#[test]
fn test_validate_accepts_mixed_case_declared_types() {
    let definitions = vec![
        definition("a", "string"),
        definition("b", "STRING"),
        definition("c", "Timestamp"),
        definition("d", "geography"),
    ];

    let validator = DefinitionValidatorService::new();
    assert!(validator.validate(&definitions).is_ok());
}
