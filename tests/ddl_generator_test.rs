/// DDL生成サービスのテスト
///
/// カラム定義からのCREATE TABLE文生成を、現実的な定義の組み合わせで
/// 確認します。宣言型は変換せず書かれたまま出力されます。
use bqcheck::core::config::TableRef;
use bqcheck::core::definition::ColumnDefinition;
use bqcheck::services::ddl_generator::DdlGeneratorService;

fn table() -> TableRef {
    TableRef {
        project: "my-project".to_string(),
        dataset: "analytics".to_string(),
        table: "events".to_string(),
    }
}

fn definition(name: &str, declared_type: &str, constraints: &[&str]) -> ColumnDefinition {
    ColumnDefinition::new(
        name.to_string(),
        declared_type.to_string(),
        constraints.iter().map(|c| c.to_string()).collect(),
    )
}

#[test]
fn test_generate_create_table_full_example() {
    let definitions = vec![
        definition("id", "int", &["REQUIRED", "PK"]),
        definition("name", "str", &["NULLABLE"]),
        definition("age", "int", &["RANGE 0 120"]),
        definition("created_at", "datetime", &["REQUIRED"]),
    ];

    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &definitions);

    let expected = "CREATE TABLE `my-project.analytics.events` (\n  id int NOT NULL PRIMARY KEY,\n  name str,\n  age int NOT NULL,\n  created_at datetime NOT NULL\n)";
    assert_eq!(ddl, expected);
}

/// NULLABLEトークンを書いた場合だけNOT NULLが外れる
#[test]
fn test_not_null_unless_nullable_declared() {
    let generator = DdlGeneratorService::new();

    // 制約なしでもNOT NULLが付く
    let ddl = generator.generate_create_table(&table(), &[definition("name", "str", &[])]);
    assert!(ddl.contains("name str NOT NULL"));

    // NULLABLE宣言でNOT NULLが外れる
    let ddl =
        generator.generate_create_table(&table(), &[definition("name", "str", &["NULLABLE"])]);
    assert!(ddl.contains("  name str\n"));
    assert!(!ddl.contains("NOT NULL"));
}

/// 宣言型はDDLに書かれたまま現れる（ネイティブ型へは変換しない）
#[test]
fn test_declared_types_are_verbatim() {
    let definitions = vec![
        definition("id", "int", &[]),
        definition("payload", "JSON", &[]),
    ];

    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &definitions);

    assert!(ddl.contains("id int NOT NULL"));
    assert!(ddl.contains("payload JSON NOT NULL"));
    assert!(!ddl.contains("INTEGER"));
}

/// PKとNULLABLEを同時に宣言した場合の出力
#[test]
fn test_nullable_primary_key() {
    let definitions = vec![definition("id", "int", &["NULLABLE", "PK"])];

    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &definitions);

    assert!(ddl.contains("  id int PRIMARY KEY"));
    assert!(!ddl.contains("NOT NULL"));
}

/// RANGEやUNIQUEなどのプローブ専用制約はDDLに現れない
#[test]
fn test_probe_constraints_do_not_affect_ddl() {
    let definitions = vec![definition("age", "int", &["UNIQUE", "RANGE 0 120", "FK"])];

    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &definitions);

    assert!(ddl.contains("  age int NOT NULL\n"));
    assert!(!ddl.contains("UNIQUE"));
    assert!(!ddl.contains("RANGE"));
}

#[test]
fn test_empty_definitions() {
    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &[]);

    assert_eq!(ddl, "CREATE TABLE `my-project.analytics.events` (\n)");
}

/// 最後のカラムの後ろにカンマは付かない
#[test]
fn test_no_trailing_comma() {
    let definitions = vec![
        definition("a", "int", &[]),
        definition("b", "str", &[]),
    ];

    let generator = DdlGeneratorService::new();
    let ddl = generator.generate_create_table(&table(), &definitions);

    assert!(ddl.contains("a int NOT NULL,\n"));
    assert!(ddl.contains("b str NOT NULL\n)"));
    assert!(!ddl.contains(",\n)"));
}
