/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 共有ローカルストレージ管理
pub mod storage;

/// 共有設定管理
pub mod config;

/// 共有ユーティリティ関数
pub mod utils;

// 便利な再エクスポート
pub use config::{
    get_environment, get_store_dirname, initialize_logging_system, load_environment_variables,
    Environment, EnvironmentConfig,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
pub use storage::{get_store_path, LocalStore, EXPENSES_KEY, USER_TOKEN_KEY};
