// initコマンドハンドラーのテスト
//
// 生成されたプロジェクトが他のコマンドからそのまま使えることを検証します。

use bqcheck::cli::commands::init::{InitCommand, InitCommandHandler};
use bqcheck::cli::commands::validate::{ValidateCommand, ValidateCommandHandler};
use bqcheck::core::config::Config;
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

#[test]
fn test_init_generated_config_parses() {
    let temp_dir = TempDir::new().unwrap();

    let handler = InitCommandHandler::new();
    let command = InitCommand {
        project_path: temp_dir.path().to_path_buf(),
        force: false,
    };
    handler.execute(&command).unwrap();

    // 生成された設定ファイルはそのまま読み込める
    let yaml = fs::read_to_string(temp_dir.path().join(".bqcheck.yaml")).unwrap();
    let config = Config::from_str(&yaml).unwrap();

    assert_eq!(config.version, "1.0");
    assert_eq!(config.project, "my-project");
    assert_eq!(config.dataset, "my_dataset");
    assert_eq!(config.table, "my_table");
    assert_eq!(config.definitions.to_str(), Some("schema/columns.def"));
    assert_eq!(config.token_env, "BIGQUERY_ACCESS_TOKEN");
    assert!(config.validate().is_ok());
}

#[test]
fn test_init_generated_project_validates() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path().to_path_buf();

    let init_handler = InitCommandHandler::new();
    init_handler
        .execute(&InitCommand {
            project_path: project_path.clone(),
            force: false,
        })
        .unwrap();

    // 生成直後のプロジェクトはvalidateを通過する
    let validate_handler = ValidateCommandHandler::new();
    let result = validate_handler.execute(&ValidateCommand {
        project_path,
        config_path: None,
        definitions: None,
    });

    assert!(result.is_ok(), "Validation failed: {:?}", result);

    let summary = result.unwrap();
    assert!(summary.contains("Columns: 5"));
    assert!(summary.contains("No errors found"));
}

#[test]
fn test_init_preserves_existing_definitions_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path().to_path_buf();

    // 定義ファイルだけが先に存在するプロジェクト
    fs::create_dir_all(project_path.join("schema")).unwrap();
    fs::write(project_path.join("schema/columns.def"), "custom,str\n").unwrap();

    let handler = InitCommandHandler::new();
    handler
        .execute(&InitCommand {
            project_path: project_path.clone(),
            force: false,
        })
        .unwrap();

    // 設定ファイルは作られるが、既存の定義は上書きされない
    assert!(project_path.join(".bqcheck.yaml").exists());
    let definitions = fs::read_to_string(project_path.join("schema/columns.def")).unwrap();
    assert_eq!(definitions, "custom,str\n");
}

#[test]
fn test_init_force_restores_placeholder_config() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path().to_path_buf();

    let handler = InitCommandHandler::new();
    handler
        .execute(&InitCommand {
            project_path: project_path.clone(),
            force: false,
        })
        .unwrap();

    // 設定を書き換えてから--forceで再初期化
    fs::write(
        project_path.join(".bqcheck.yaml"),
        "version: \"1.0\"\nproject: edited\ndataset: d\ntable: t\n",
    )
    .unwrap();

    handler
        .execute(&InitCommand {
            project_path: project_path.clone(),
            force: true,
        })
        .unwrap();

    let yaml = fs::read_to_string(project_path.join(".bqcheck.yaml")).unwrap();
    let config = Config::from_str(&yaml).unwrap();
    assert_eq!(config.project, "my-project");
}
