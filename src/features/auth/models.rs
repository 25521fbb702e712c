use serde::Deserialize;

/// ログインフォームの認証情報
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// メールアドレス
    pub email: String,
    /// パスワード
    pub password: String,
}

/// セッションの有無に応じた初期ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// ログイン画面
    Login,
    /// メインのタブ画面
    HomeTabs,
}
