// Adapters
// BigQuery REST APIへのアクセスを抽象化

pub mod bigquery;
pub mod warehouse;
