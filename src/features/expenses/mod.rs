/// 経費機能モジュール
///
/// このモジュールは経費管理に関連するすべての機能を提供します：
/// - 経費の提出・一覧取得・削除
/// - 提出フォームのバリデーション
/// - 精算済みフラグによる絞り込み
/// - 一覧画面コントローラ（フォーカス時の再読み込み、詳細表示、削除）
// サブモジュールの宣言
pub mod commands;
pub mod list;
pub mod models;
pub mod repository;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{
    default_transaction_date, placeholder_expenses, Expense, SubmitExpenseDto,
    PENDING_APPROVAL_COLOR, PENDING_APPROVAL_STATUS,
};

// コマンド（画面からの操作）
pub use commands::{delete_expense, get_expenses, submit_expense, validate_submission};

// 一覧画面コントローラ
pub use list::{ExpenseFilter, ExpenseList};

// リポジトリ（ストレージ操作）
pub use repository::{append, filter_by_reimbursed, is_initialized, load_all, remove};
