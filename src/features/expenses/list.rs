use crate::features::expenses::models::{placeholder_expenses, Expense};
use crate::features::expenses::repository;
use crate::shared::storage::LocalStore;

/// 一覧画面の絞り込み条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseFilter {
    /// 全件（ホーム画面）
    All,
    /// 未精算のみ（My Invoices画面）
    Invoices,
    /// 精算済みのみ（Reimbursements画面）
    Reimbursements,
}

/// 一覧画面のコントローラ
///
/// 各画面は絞り込み済みの一覧のローカルコピーを保持し、画面がフォーカス
/// されるたびにストアから再読み込みする。ホーム画面（All）は一覧が一度も
/// 保存されていない場合にプレースホルダーのデモデータを表示する。
#[derive(Debug)]
pub struct ExpenseList {
    filter: ExpenseFilter,
    items: Vec<Expense>,
}

impl ExpenseList {
    /// 指定の絞り込み条件でコントローラを作成する
    ///
    /// # 引数
    /// * `filter` - 一覧の絞り込み条件
    ///
    /// # 戻り値
    /// 空の一覧を保持するコントローラ（表示前にreloadを呼ぶ）
    pub fn new(filter: ExpenseFilter) -> Self {
        Self {
            filter,
            items: Vec::new(),
        }
    }

    /// 画面フォーカス時の再読み込み
    ///
    /// # 引数
    /// * `store` - ローカルストア
    ///
    /// ストアから全件を読み込み、絞り込み条件を適用してローカルコピーを
    /// 置き換える。
    pub fn reload(&mut self, store: &LocalStore) {
        let records = if self.filter == ExpenseFilter::All && !repository::is_initialized(store) {
            // ホーム画面は初回起動時のみプレースホルダーを表示する
            placeholder_expenses()
        } else {
            repository::load_all(store)
        };

        self.items = match self.filter {
            ExpenseFilter::All => records,
            ExpenseFilter::Invoices => repository::filter_by_reimbursed(&records, false),
            ExpenseFilter::Reimbursements => repository::filter_by_reimbursed(&records, true),
        };

        log::debug!(
            "一覧を再読み込みしました: filter={:?}, count={}",
            self.filter,
            self.items.len()
        );
    }

    /// 表示中の一覧を取得する
    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    /// 詳細表示用に経費を選択する
    ///
    /// # 引数
    /// * `id` - 選択する経費のID
    ///
    /// # 戻り値
    /// 表示中の一覧に含まれる場合はその経費
    pub fn select(&self, id: &str) -> Option<&Expense> {
        self.items.iter().find(|expense| expense.id == id)
    }

    /// 詳細表示からの経費削除
    ///
    /// # 引数
    /// * `store` - ローカルストア
    /// * `id` - 削除する経費のID
    ///
    /// 削除はリポジトリ経由で全件の一覧に対して行い、その後ローカル
    /// コピーを再読み込みする。絞り込みで表示されていないレコードが
    /// 消えることはない。
    pub fn delete(&mut self, store: &LocalStore, id: &str) {
        repository::remove(store, id);
        self.reload(store);
    }
}
