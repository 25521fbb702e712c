// 添付ファイル機能モジュール

pub mod models;
pub mod service;

// 公開インターフェース

// モデル
pub use models::{CameraPermission, CaptureOutcome, CapturedPhoto, PickedFile, PickerOutcome};

// サービス
pub use service::{AttachmentSlot, MAX_ATTACHMENT_BYTES};
