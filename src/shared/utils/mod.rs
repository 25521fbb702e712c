/// 共有ユーティリティ関数
pub mod expense_id;

pub use expense_id::{generate_expense_id, is_valid_expense_id};
