use crate::shared::config::environment::{get_environment, get_store_dirname};
use crate::shared::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 経費一覧のストレージキー
pub const EXPENSES_KEY: &str = "expenses";

/// セッショントークンのストレージキー
pub const USER_TOKEN_KEY: &str = "userToken";

/// ローカルのキーバリューストア
///
/// 1キーにつき1ファイルをストアディレクトリ直下に保存する。
/// 値は文字列（経費一覧の場合はJSONテキスト）をそのまま書き込む。
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// 指定ディレクトリのストアを開く
    ///
    /// # 引数
    /// * `root` - ストアディレクトリのパス
    ///
    /// # 戻り値
    /// ストアのハンドル、または失敗時はエラー
    ///
    /// # 処理内容
    /// ディレクトリが存在しない場合は作成する
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();

        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| {
                AppError::storage(format!("ストアディレクトリの作成に失敗: {e}"))
            })?;
            log::info!("ストアディレクトリを作成: {:?}", root);
        }

        Ok(Self { root })
    }

    /// 既定のストアディレクトリでストアを開く
    ///
    /// # 戻り値
    /// ストアのハンドル、または失敗時はエラー
    pub fn open_default() -> AppResult<Self> {
        let path = get_store_path()?;
        let store = Self::open(path)?;
        log::info!("ローカルストアを開きました: {:?}", store.root);
        Ok(store)
    }

    /// ストアディレクトリのパスを取得する
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// キーに対応する値を取得する
    ///
    /// # 引数
    /// * `key` - ストレージキー
    ///
    /// # 戻り値
    /// 値（キーが一度も書かれていない場合はNone）、または失敗時はエラー
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("キー{key}の読み込みに失敗: {e}"))),
        }
    }

    /// キーに値を書き込む（既存の値は置き換える）
    ///
    /// # 引数
    /// * `key` - ストレージキー
    /// * `value` - 書き込む値
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.key_path(key), value)
            .map_err(|e| AppError::storage(format!("キー{key}の書き込みに失敗: {e}")))
    }

    /// キーを削除する
    ///
    /// # 引数
    /// * `key` - ストレージキー
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    ///
    /// 存在しないキーの削除は何もしない
    pub fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("キー{key}の削除に失敗: {e}"))),
        }
    }

    /// キーが書き込まれているかどうかを判定する
    ///
    /// # 引数
    /// * `key` - ストレージキー
    ///
    /// # 戻り値
    /// キーが存在する場合はtrue
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// キーに対応するファイルパスを組み立てる
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

/// 既定のストアディレクトリのパスを取得する
///
/// # 戻り値
/// ストアディレクトリのパス、または失敗時はエラー
///
/// # 解決順序
/// 1. 環境変数 REIMBURSE_MEMO_DIR が設定されていればそのパス
/// 2. プラットフォームのデータディレクトリ + アプリ名 + 環境別ディレクトリ名
pub fn get_store_path() -> AppResult<PathBuf> {
    if let Ok(dir) = std::env::var("REIMBURSE_MEMO_DIR") {
        log::debug!("ストアディレクトリ: 環境変数REIMBURSE_MEMO_DIRを使用 -> {dir}");
        return Ok(PathBuf::from(dir));
    }

    let data_dir = dirs::data_dir().ok_or_else(|| {
        AppError::storage("プラットフォームのデータディレクトリの取得に失敗")
    })?;

    let dirname = get_store_dirname(get_environment());
    Ok(data_dir.join("reimburse-memo").join(dirname))
}
