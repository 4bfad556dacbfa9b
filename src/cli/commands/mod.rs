// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod check;
pub mod ddl;
pub mod init;
pub mod validate;
