// 添付ファイル機能のデータモデル

use serde::{Deserialize, Serialize};

/// ドキュメントピッカーから返されるファイル参照
///
/// ファイルの内容は読み込まない。URIとメタデータのみを保持する。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PickedFile {
    /// ローカルファイルのURI
    pub uri: String,
    /// ファイル名（ピッカーが返す場合のみ）
    pub name: Option<String>,
    /// ファイルサイズ（バイト、ピッカーが返す場合のみ）
    pub size: Option<u64>,
    /// MIMEタイプ（ピッカーが返す場合のみ）
    pub mime_type: Option<String>,
}

/// ドキュメントピッカー操作の結果
#[derive(Debug, Clone)]
pub enum PickerOutcome {
    /// ファイルが選択された
    Picked(PickedFile),
    /// ユーザーがキャンセルした
    Cancelled,
}

/// カメラ撮影で得られる写真参照（URIのみ、サイズは報告されない）
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub uri: String,
}

/// カメラ撮影操作の結果
#[derive(Debug, Clone)]
pub enum CaptureOutcome {
    /// 写真が撮影された
    Captured(CapturedPhoto),
    /// ユーザーがキャンセルした
    Cancelled,
}

/// カメラ使用許可の状態
///
/// 許可の取得自体はOS側の一回きりのゲートであり、このコードからは
/// 再試行できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPermission {
    Granted,
    Denied,
}

impl From<CapturedPhoto> for PickedFile {
    fn from(photo: CapturedPhoto) -> Self {
        PickedFile {
            uri: photo.uri,
            name: None,
            size: None,
            mime_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picked_file_serialization_field_names() {
        let file = PickedFile {
            uri: "file:///tmp/receipt.pdf".to_string(),
            name: Some("receipt.pdf".to_string()),
            size: Some(1024),
            mime_type: Some("application/pdf".to_string()),
        };

        // ピッカーが返すJSONと互換のフィールド名を確認
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""mimeType":"application/pdf""#));

        let deserialized: PickedFile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.uri, file.uri);
        assert_eq!(deserialized.size, Some(1024));
    }

    #[test]
    fn test_captured_photo_conversion() {
        let photo = CapturedPhoto {
            uri: "file:///tmp/photo.jpg".to_string(),
        };

        let file: PickedFile = photo.into();
        assert_eq!(file.uri, "file:///tmp/photo.jpg");
        assert_eq!(file.name, None);
        assert_eq!(file.size, None);
        assert_eq!(file.mime_type, None);
    }
}
