pub mod features;
pub mod shared;

use log::info;
use shared::config;
use shared::errors::AppResult;
use shared::storage::LocalStore;

/// アプリケーション状態（ローカルストアのハンドルを保持）
pub struct AppState {
    pub store: LocalStore,
}

/// アプリケーションを初期化する
///
/// # 戻り値
/// アプリケーション状態、または失敗時はエラー
///
/// # 処理内容
/// 1. 環境変数を読み込み（.envファイルがある場合）
/// 2. ログシステムを初期化
/// 3. ローカルストアを開く
pub fn initialize_app() -> AppResult<AppState> {
    // 環境変数を読み込み（.envファイルがある場合）
    config::load_environment_variables();

    // ログシステムを初期化
    config::initialize_logging_system();

    info!("アプリケーション初期化を開始します...");

    let store = LocalStore::open_default()?;

    info!("アプリケーション初期化が完了しました");

    Ok(AppState { store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::attachments::{AttachmentSlot, PickedFile, PickerOutcome};
    use crate::features::auth::{self, Credentials, Route};
    use crate::features::expenses::{self, ExpenseFilter, ExpenseList, SubmitExpenseDto};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_full_user_flow() {
        let (_dir, store) = create_test_store();

        // 起動直後は未ログイン
        assert_eq!(auth::initial_route(&store), Route::Login);

        // ログイン
        auth::login(
            &store,
            &Credentials {
                email: "test@example.com".to_string(),
                password: "password".to_string(),
            },
        )
        .unwrap();
        assert_eq!(auth::initial_route(&store), Route::HomeTabs);

        // 添付ファイルを選択して経費を提出
        let mut slot = AttachmentSlot::new();
        slot.attach_picked(PickerOutcome::Picked(PickedFile {
            uri: "file:///tmp/receipt.jpg".to_string(),
            name: Some("receipt.jpg".to_string()),
            size: Some(2048),
            mime_type: Some("image/jpeg".to_string()),
        }))
        .unwrap();

        let dto = SubmitExpenseDto {
            amount: "4,200".to_string(),
            date: expenses::default_transaction_date(),
            description: "client dinner".to_string(),
            category: "Food".to_string(),
        };
        let submitted = expenses::submit_expense(&store, dto, slot.selected()).unwrap();
        assert_eq!(submitted.attachments, 1);

        // My Invoices画面に表示される
        let mut invoices = ExpenseList::new(ExpenseFilter::Invoices);
        invoices.reload(&store);
        assert_eq!(invoices.items().len(), 1);

        // 詳細表示から削除
        invoices.delete(&store, &submitted.id);
        assert!(invoices.items().is_empty());
        assert!(expenses::load_all(&store).is_empty());

        // ログアウトでログイン画面に戻る
        auth::logout(&store);
        assert_eq!(auth::initial_route(&store), Route::Login);
    }
}
