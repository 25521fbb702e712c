/// 共有設定管理モジュール
pub mod environment;

pub use environment::{
    get_environment, get_store_dirname, initialize_logging_system, load_environment_variables,
    Environment, EnvironmentConfig,
};
