use crate::features::auth::models::{Credentials, Route};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::{LocalStore, USER_TOKEN_KEY};

/// 受け付ける唯一のメールアドレス（ハードコード）
const ACCEPTED_EMAIL: &str = "test@example.com";

/// 受け付ける唯一のパスワード（ハードコード）
const ACCEPTED_PASSWORD: &str = "password";

/// セッションマーカーとして保存する固定トークン
///
/// 値自体に意味はなく、キーの有無だけがルーティングに使われる。
const SESSION_TOKEN: &str = "dummy-token";

/// ログインする
///
/// # 引数
/// * `store` - ローカルストア
/// * `credentials` - ログインフォームの認証情報
///
/// # 戻り値
/// 成功時はOk(())、認証情報が一致しない場合はエラー
///
/// ハードコードされた1組の認証情報のみを受け付ける。成功時はセッション
/// トークンを保存する。トークンの保存失敗はログのみ残す（次回起動時に
/// 再ログインすればよい）。
pub fn login(store: &LocalStore, credentials: &Credentials) -> AppResult<()> {
    if credentials.email != ACCEPTED_EMAIL || credentials.password != ACCEPTED_PASSWORD {
        log::warn!("ログインに失敗しました: email={}", credentials.email);
        return Err(AppError::InvalidCredentials);
    }

    if let Err(e) = store.set(USER_TOKEN_KEY, SESSION_TOKEN) {
        log::error!("セッショントークンの保存に失敗しました: {}", e.details());
    }

    log::info!("ログインしました: email={}", credentials.email);
    Ok(())
}

/// ログアウトする
///
/// # 引数
/// * `store` - ローカルストア
///
/// セッショントークンを削除し、ルーティングをログイン画面に戻す。
/// 削除失敗はログのみ残す。
pub fn logout(store: &LocalStore) {
    if let Err(e) = store.remove(USER_TOKEN_KEY) {
        log::error!("セッショントークンの削除に失敗しました: {}", e.details());
    }

    log::info!("ログアウトしました");
}

/// ログイン済みかどうかを判定する
///
/// # 引数
/// * `store` - ローカルストア
///
/// # 戻り値
/// セッショントークンのキーが存在する場合はtrue
///
/// トークンの値は検証しない。キーの有無だけで判定する。
pub fn is_logged_in(store: &LocalStore) -> bool {
    match store.get(USER_TOKEN_KEY) {
        Ok(token) => token.is_some(),
        Err(e) => {
            log::warn!(
                "セッショントークンの読み込みに失敗したため未ログインとして扱います: {}",
                e.details()
            );
            false
        }
    }
}

/// 起動時の初期ルートを決定する
///
/// # 引数
/// * `store` - ローカルストア
///
/// # 戻り値
/// ログイン済みならメインのタブ画面、未ログインならログイン画面
pub fn initial_route(store: &LocalStore) -> Route {
    if is_logged_in(store) {
        Route::HomeTabs
    } else {
        Route::Login
    }
}
