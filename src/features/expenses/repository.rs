use crate::features::expenses::models::Expense;
use crate::shared::errors::AppResult;
use crate::shared::storage::{LocalStore, EXPENSES_KEY};

/// 経費一覧をストアから読み込む
///
/// # 引数
/// * `store` - ローカルストア
///
/// # 戻り値
/// 保存順（＝提出順）の経費一覧
///
/// 一度も保存されていない場合は空を返す。保存内容の解析に失敗した場合も
/// 「データなし」として扱い、空を返す（呼び出し側にはエラーを伝えない）。
/// 壊れたローカルデータでアプリが使用不能になることを避けるための
/// 意図的なトレードオフ。
pub fn load_all(store: &LocalStore) -> Vec<Expense> {
    match read_records(store) {
        Ok(expenses) => expenses,
        Err(e) => {
            log::warn!(
                "経費一覧の読み込みに失敗したため空として扱います: {}",
                e.details()
            );
            Vec::new()
        }
    }
}

/// 経費を一覧の末尾に追加してストアへ書き戻す
///
/// # 引数
/// * `store` - ローカルストア
/// * `expense` - 追加する経費レコード
///
/// 全件の読み込み・追加・書き戻しを1サイクルで行う。書き込みに失敗した
/// 場合はログのみ残し、呼び出し側の表示が更新されないだけに留める。
pub fn append(store: &LocalStore, expense: Expense) {
    let mut expenses = load_all(store);
    expenses.push(expense);

    if let Err(e) = write_records(store, &expenses) {
        log::error!("経費の保存に失敗しました: {}", e.details());
    }
}

/// 指定IDの経費を一覧から削除してストアへ書き戻す
///
/// # 引数
/// * `store` - ローカルストア
/// * `id` - 削除する経費のID
///
/// 削除は常に全件の一覧に対して行う（フィルタ済みのスナップショットを
/// 書き戻すと表示されていないレコードが消えてしまう）。存在しないIDの
/// 削除は何もしない。
pub fn remove(store: &LocalStore, id: &str) {
    let mut expenses = load_all(store);
    let before = expenses.len();
    expenses.retain(|expense| expense.id != id);

    if expenses.len() == before {
        log::debug!("削除対象の経費が見つかりませんでした: id={id}");
    }

    if let Err(e) = write_records(store, &expenses) {
        log::error!("経費の削除結果の保存に失敗しました: {}", e.details());
    }
}

/// 精算済みフラグで経費一覧を絞り込む
///
/// # 引数
/// * `expenses` - 読み込み済みの経費一覧
/// * `reimbursed` - 絞り込むフラグの値
///
/// # 戻り値
/// フラグが一致する経費のみの一覧（相対順序は保持）
pub fn filter_by_reimbursed(expenses: &[Expense], reimbursed: bool) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| expense.reimbursed == reimbursed)
        .cloned()
        .collect()
}

/// 経費一覧が一度でも保存されたことがあるかどうかを判定する
///
/// # 引数
/// * `store` - ローカルストア
///
/// # 戻り値
/// "expenses"キーが存在する場合はtrue
pub fn is_initialized(store: &LocalStore) -> bool {
    store.contains(EXPENSES_KEY)
}

/// ストアから経費一覧を読み込んで解析する
fn read_records(store: &LocalStore) -> AppResult<Vec<Expense>> {
    match store.get(EXPENSES_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// 経費一覧をJSONにシリアライズしてストアへ書き込む
fn write_records(store: &LocalStore, expenses: &[Expense]) -> AppResult<()> {
    let json = serde_json::to_string(expenses)?;
    store.set(EXPENSES_KEY, &json)
}
