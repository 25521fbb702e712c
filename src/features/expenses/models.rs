use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 新規提出時に設定される固定ステータス（承認ワークフローは未実装のため遷移しない）
pub const PENDING_APPROVAL_STATUS: &str = "Pending Your Approval";

/// 新規提出時のステータスに対応する表示色
pub const PENDING_APPROVAL_COLOR: &str = "#FF9500";

/// 経費レコードのデータモデル
///
/// シリアライズ時のフィールド名は保存済みJSONと互換にする
/// （`type`、`statusColor`など）。初期のシードデータに存在しなかった
/// フィールドは読み込み時にデフォルト値で補完する。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// カテゴリラベル（自由入力）
    #[serde(rename = "type")]
    pub category: String,
    pub status: String,
    pub status_color: String,
    /// 金額（テキストのまま保持。通貨の解析・検証は行わない）
    pub amount: String,
    /// 作成日時（ISO-8601形式）
    pub date: String,
    #[serde(default)]
    pub description: String,
    /// 添付ファイル数（実運用では0または1）
    #[serde(default)]
    pub attachments: u32,
    /// 添付ファイルのローカル参照（attachments > 0 の場合のみ存在）
    #[serde(default)]
    pub uri: Option<String>,
    /// 精算済みフラグ（作成時は常にfalse、フィルタリングの入力としてのみ使用）
    #[serde(default)]
    pub reimbursed: bool,
}

/// 経費提出フォームのDTO
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitExpenseDto {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

/// 提出フォームの取引日の初期値を取得する
///
/// 日付ピッカーは現在時刻で初期化されるため、日付が「未入力」になることは
/// 通常ない。
///
/// # 戻り値
/// 現在時刻のISO-8601文字列
pub fn default_transaction_date() -> String {
    Utc::now().to_rfc3339()
}

/// ホーム画面用のプレースホルダー経費一覧を取得する
///
/// ストアに一度も保存されていない場合にのみ表示されるデモデータで、
/// 永続化はされない。
///
/// # 戻り値
/// 固定4件のプレースホルダーレコード
pub fn placeholder_expenses() -> Vec<Expense> {
    let now = Utc::now().to_rfc3339();

    vec![
        Expense {
            id: "TR".to_string(),
            category: "Travel".to_string(),
            status: "Missing Fields".to_string(),
            status_color: "#FF9500".to_string(),
            amount: "12,333".to_string(),
            date: now.clone(),
            description: String::new(),
            attachments: 0,
            uri: None,
            reimbursed: false,
        },
        Expense {
            id: "FO".to_string(),
            category: "Food".to_string(),
            status: "Missing Receipts".to_string(),
            status_color: "#FF3B30".to_string(),
            amount: "12,333".to_string(),
            date: now.clone(),
            description: String::new(),
            attachments: 0,
            uri: None,
            reimbursed: false,
        },
        Expense {
            id: "OI".to_string(),
            category: "Office Item".to_string(),
            status: PENDING_APPROVAL_STATUS.to_string(),
            status_color: PENDING_APPROVAL_COLOR.to_string(),
            amount: "12,333".to_string(),
            date: now.clone(),
            description: String::new(),
            attachments: 0,
            uri: None,
            reimbursed: false,
        },
        Expense {
            id: "PP".to_string(),
            category: "Petty Purchase".to_string(),
            status: "Missing Receipts".to_string(),
            status_color: "#FF3B30".to_string(),
            amount: "12,333".to_string(),
            date: now,
            description: String::new(),
            attachments: 0,
            uri: None,
            reimbursed: false,
        },
    ]
}
