use crate::features::attachments::models::PickedFile;
use crate::features::expenses::models::{
    Expense, SubmitExpenseDto, PENDING_APPROVAL_COLOR, PENDING_APPROVAL_STATUS,
};
use crate::features::expenses::repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::LocalStore;
use crate::shared::utils::generate_expense_id;

/// 経費を提出する
///
/// # 引数
/// * `store` - ローカルストア
/// * `dto` - 提出フォームのDTO
/// * `attachment` - 選択済みの添付ファイル（任意）
///
/// # 戻り値
/// 作成された経費レコード、またはバリデーション失敗時はエラー
///
/// # 処理内容
/// 1. 必須項目のバリデーション
/// 2. ID・ステータス・精算フラグを付与してレコードを組み立て
/// 3. 一覧の末尾に追加して保存
pub fn submit_expense(
    store: &LocalStore,
    dto: SubmitExpenseDto,
    attachment: Option<&PickedFile>,
) -> AppResult<Expense> {
    // バリデーション
    validate_submission(&dto)?;

    let expense = Expense {
        id: generate_expense_id(),
        category: dto.category,
        status: PENDING_APPROVAL_STATUS.to_string(),
        status_color: PENDING_APPROVAL_COLOR.to_string(),
        amount: dto.amount,
        date: dto.date,
        description: dto.description,
        attachments: if attachment.is_some() { 1 } else { 0 },
        uri: attachment.map(|file| file.uri.clone()),
        reimbursed: false,
    };

    repository::append(store, expense.clone());
    log::info!("経費を提出しました: id={}", expense.id);

    Ok(expense)
}

/// 経費一覧を取得する（精算済みフラグで絞り込み可能）
///
/// # 引数
/// * `store` - ローカルストア
/// * `reimbursed` - 精算済みフラグのフィルター（Noneの場合は全件）
///
/// # 戻り値
/// 提出順の経費一覧
pub fn get_expenses(store: &LocalStore, reimbursed: Option<bool>) -> Vec<Expense> {
    let expenses = repository::load_all(store);

    match reimbursed {
        Some(flag) => repository::filter_by_reimbursed(&expenses, flag),
        None => expenses,
    }
}

/// 経費を削除する
///
/// # 引数
/// * `store` - ローカルストア
/// * `id` - 削除する経費のID
///
/// 存在しないIDの削除は何もしない
pub fn delete_expense(store: &LocalStore, id: &str) {
    repository::remove(store, id);
    log::info!("経費を削除しました: id={id}");
}

/// 提出フォームのバリデーション
///
/// # 引数
/// * `dto` - 提出フォームのDTO
///
/// # 戻り値
/// すべての必須項目が入力されていればOk(())、未入力があればエラー
///
/// 日付はフォーム側で現在時刻が初期値になるため通常は空にならないが、
/// 念のため他の項目と同様にチェックする。数値範囲・通貨形式・日付範囲の
/// 検証は行わない。
pub fn validate_submission(dto: &SubmitExpenseDto) -> AppResult<()> {
    let mut missing = Vec::new();

    if dto.amount.is_empty() {
        missing.push("amount");
    }
    if dto.date.is_empty() {
        missing.push("date");
    }
    if dto.description.is_empty() {
        missing.push("description");
    }
    if dto.category.is_empty() {
        missing.push("category");
    }

    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::expenses::models::default_transaction_date;
    use crate::shared::utils::is_valid_expense_id;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn sample_dto() -> SubmitExpenseDto {
        SubmitExpenseDto {
            amount: "100".to_string(),
            date: default_transaction_date(),
            description: "lunch".to_string(),
            category: "Food".to_string(),
        }
    }

    #[test]
    fn test_submit_expense_without_attachment() {
        let (_dir, store) = create_test_store();

        let expense = submit_expense(&store, sample_dto(), None).unwrap();

        // 新規レコードの固定値を確認
        assert!(is_valid_expense_id(&expense.id));
        assert_eq!(expense.status, PENDING_APPROVAL_STATUS);
        assert_eq!(expense.status_color, PENDING_APPROVAL_COLOR);
        assert_eq!(expense.attachments, 0);
        assert_eq!(expense.uri, None);
        assert!(!expense.reimbursed);

        // ストアに保存されていることを確認
        let stored = get_expenses(&store, None);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, expense.id);
        assert_eq!(stored[0].category, "Food");
        assert_eq!(stored[0].amount, "100");
        assert_eq!(stored[0].description, "lunch");
    }

    #[test]
    fn test_submit_expense_with_attachment() {
        let (_dir, store) = create_test_store();

        let file = PickedFile {
            uri: "file:///tmp/receipt.jpg".to_string(),
            name: Some("receipt.jpg".to_string()),
            size: Some(1024),
            mime_type: Some("image/jpeg".to_string()),
        };

        let expense = submit_expense(&store, sample_dto(), Some(&file)).unwrap();

        assert_eq!(expense.attachments, 1);
        assert_eq!(expense.uri.as_deref(), Some("file:///tmp/receipt.jpg"));
    }

    #[test]
    fn test_submit_blocked_on_empty_category() {
        let (_dir, store) = create_test_store();

        let mut dto = sample_dto();
        dto.category = String::new();

        let result = submit_expense(&store, dto, None);
        assert!(matches!(result, Err(AppError::MissingFields(_))));

        // ブロックされた場合はレコードが追加されない
        assert!(get_expenses(&store, None).is_empty());
    }

    #[test]
    fn test_validate_submission_reports_all_missing_fields() {
        let dto = SubmitExpenseDto {
            amount: String::new(),
            date: default_transaction_date(),
            description: String::new(),
            category: "Food".to_string(),
        };

        let error = validate_submission(&dto).unwrap_err();
        let details = error.details();
        assert!(details.contains("amount"));
        assert!(details.contains("description"));
        assert!(!details.contains("category"));
    }

    #[test]
    fn test_get_expenses_with_filter() {
        let (_dir, store) = create_test_store();

        submit_expense(&store, sample_dto(), None).unwrap();
        submit_expense(&store, sample_dto(), None).unwrap();

        // 新規提出はすべて未精算なのでreimbursed=trueは空
        assert_eq!(get_expenses(&store, Some(false)).len(), 2);
        assert!(get_expenses(&store, Some(true)).is_empty());
    }

    #[test]
    fn test_delete_expense() {
        let (_dir, store) = create_test_store();

        let first = submit_expense(&store, sample_dto(), None).unwrap();
        let second = submit_expense(&store, sample_dto(), None).unwrap();

        delete_expense(&store, &first.id);

        let remaining = get_expenses(&store, None);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }
}
