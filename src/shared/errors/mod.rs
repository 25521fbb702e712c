use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// 必須項目が未入力の場合のエラー（提出ブロック）
    #[error("必須項目が未入力です: {0}")]
    MissingFields(String),

    /// 添付ファイルがサイズ上限を超えた場合のエラー
    #[error("ファイルサイズが上限を超えています: {size}バイト（上限 {limit}バイト）")]
    FileTooLarge { size: u64, limit: u64 },

    /// ログイン認証情報が不正な場合のエラー
    #[error("認証情報が不正です")]
    InvalidCredentials,

    /// ローカルストレージ関連のエラー
    #[error("ストレージエラー: {0}")]
    Storage(String),

    /// I/O関連のエラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（ファイル操作エラーなど）
    Medium,
    /// 高重要度（ストレージエラーなど）
    High,
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    ///
    /// アプリのUI文言は英語のため、ここで返すメッセージも英語とする。
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> &str {
        match self {
            AppError::MissingFields(_) => "Please fill in all required fields",
            AppError::FileTooLarge { .. } => "File size must be less than 5MB",
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::Storage(_) | AppError::Io(_) | AppError::Json(_) => {
                "Failed to access local storage"
            }
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::MissingFields(_) => ErrorSeverity::Low,
            AppError::FileTooLarge { .. } => ErrorSeverity::Low,
            AppError::InvalidCredentials => ErrorSeverity::Low,
            AppError::Storage(_) => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// 必須項目未入力エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `fields` - 未入力だった項目名のリスト
    ///
    /// # 戻り値
    /// 必須項目未入力エラー
    pub fn missing_fields(fields: &[&str]) -> Self {
        AppError::MissingFields(fields.join(", "))
    }

    /// ファイルサイズ超過エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `size` - 実際のファイルサイズ（バイト）
    /// * `limit` - サイズ上限（バイト）
    ///
    /// # 戻り値
    /// ファイルサイズ超過エラー
    pub fn file_too_large(size: u64, limit: u64) -> Self {
        AppError::FileTooLarge { size, limit }
    }

    /// ストレージエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - ストレージエラーメッセージ
    ///
    /// # 戻り値
    /// ストレージエラー
    pub fn storage<S: Into<String>>(message: S) -> Self {
        AppError::Storage(message.into())
    }
}

/// AppErrorからStringへの変換（UI側へのアラート文言受け渡しのため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
