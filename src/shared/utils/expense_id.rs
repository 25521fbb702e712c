use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

/// 経費IDのプレフィックス
const ID_PREFIX: &str = "EXP";

/// ランダムサフィックスの長さ
///
/// 同一ミリ秒内に大量のIDを生成しても衝突しない幅を確保する
/// （8文字の英数字 = 62^8 通り）。
const SUFFIX_LENGTH: usize = 8;

/// 経費レコード用のIDを生成する
///
/// # 戻り値
/// "EXP" + 現在時刻のミリ秒 + 8文字の英数字サフィックス
///
/// # 特性
/// - 文字セット: サフィックスはA-Za-z0-9
/// - 削除後も再利用されない（時刻ベースのため単調に変化する）
pub fn generate_expense_id() -> String {
    generate_expense_id_at(Utc::now().timestamp_millis())
}

/// 指定した時刻ミリ秒で経費IDを生成する（テスト用）
///
/// # 引数
/// * `timestamp_millis` - IDに埋め込む時刻（ミリ秒）
///
/// # 戻り値
/// 指定時刻に基づく経費ID
pub fn generate_expense_id_at(timestamp_millis: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{ID_PREFIX}{timestamp_millis}{suffix}")
}

/// 経費IDが有効な形式かどうかを検証する
///
/// # 引数
/// * `id` - 検証するID文字列
///
/// # 戻り値
/// 有効な場合はtrue、無効な場合はfalse
///
/// # 検証条件
/// - "EXP"で始まる
/// - 続けて1桁以上の数字（ミリ秒タイムスタンプ）
/// - 末尾が8文字の英数字サフィックス
pub fn is_valid_expense_id(id: &str) -> bool {
    let rest = match id.strip_prefix(ID_PREFIX) {
        Some(rest) => rest,
        None => return false,
    };

    if rest.len() <= SUFFIX_LENGTH {
        return false;
    }

    let (millis, suffix) = rest.split_at(rest.len() - SUFFIX_LENGTH);
    millis.chars().all(|c| c.is_ascii_digit())
        && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_expense_id_format() {
        let id = generate_expense_id();

        assert!(id.starts_with("EXP"));
        assert!(is_valid_expense_id(&id));
    }

    #[test]
    fn test_generate_expense_id_uniqueness() {
        let id1 = generate_expense_id();
        let id2 = generate_expense_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_same_millisecond_collision_resistance() {
        // 同一ミリ秒内で10,000件生成しても衝突しないことを確認
        let millis = 1_700_000_000_000;
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let id = generate_expense_id_at(millis);
            assert!(seen.insert(id), "同一ミリ秒内でIDが衝突しました");
        }
    }

    #[test]
    fn test_is_valid_expense_id() {
        // 有効なID
        let valid_id = generate_expense_id_at(1_700_000_000_000);
        assert!(is_valid_expense_id(&valid_id));

        // 無効なID（プレフィックスなし）
        assert!(!is_valid_expense_id("1700000000000abcdefgh"));

        // 無効なID（タイムスタンプ部分がない）
        assert!(!is_valid_expense_id("EXPabcdefgh"));

        // 無効なID（サフィックスに記号を含む）
        assert!(!is_valid_expense_id("EXP1700000000000abc-e@gh"));

        // 無効なID（空文字列）
        assert!(!is_valid_expense_id(""));
    }
}
