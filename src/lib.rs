// Bqcheckライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインモデル（カラム定義、ライブスキーマ、レポート、設定）
// - adapters: BigQuery REST APIへのアクセスを抽象化
// - services: アプリケーションサービス（解析、検証、比較、DDL生成）

pub mod cli;
pub mod core;
pub mod adapters;
pub mod services;
