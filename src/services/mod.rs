// Services Layer
// ドメインロジックを実行するサービス層

pub mod config_loader;
pub mod ddl_generator;
pub mod definition_parser;
pub mod definition_validator;
pub mod schema_comparator;
pub mod type_mapper;
