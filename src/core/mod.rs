// Core Domain
// カラム定義、ライブスキーマ、比較レポートの純粋なビジネスロジック

pub mod config;
pub mod definition;
pub mod error;
pub mod live_schema;
pub mod naming;
pub mod report;
