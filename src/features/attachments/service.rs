use crate::features::attachments::models::{
    CameraPermission, CaptureOutcome, PickedFile, PickerOutcome,
};
use crate::shared::errors::{AppError, AppResult};

/// 添付ファイルのサイズ上限（5MB = 5 * 1024 * 1024 バイト）
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// 提出フォームの添付ファイルスロット
///
/// 添付は0件または1件。新しい選択は前の選択を置き換えるが、サイズ上限で
/// 拒否された場合は前の選択をそのまま残す。ファイルの内容の読み込み・
/// 変換・形式検証は行わない（形式の絞り込みはピッカー側のMIMEフィルタに
/// 任せる）。
#[derive(Debug, Default)]
pub struct AttachmentSlot {
    selected: Option<PickedFile>,
}

impl AttachmentSlot {
    /// 空のスロットを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル参照をスロットにセットする
    ///
    /// # 引数
    /// * `file` - ピッカーまたはカメラから得たファイル参照
    ///
    /// # 戻り値
    /// 成功時はOk(())、サイズ上限超過時はエラー
    ///
    /// サイズが報告されないファイル（カメラ撮影など）はチェックせずに
    /// 受け付ける。
    pub fn attach(&mut self, file: PickedFile) -> AppResult<()> {
        if let Some(size) = file.size {
            if size > MAX_ATTACHMENT_BYTES {
                // 前の選択は保持したまま拒否する
                log::warn!(
                    "添付ファイルがサイズ上限を超えています: size={size}, limit={MAX_ATTACHMENT_BYTES}"
                );
                return Err(AppError::file_too_large(size, MAX_ATTACHMENT_BYTES));
            }
        }

        log::debug!("添付ファイルを選択しました: uri={}", file.uri);
        self.selected = Some(file);
        Ok(())
    }

    /// ドキュメントピッカーの結果をスロットに反映する
    ///
    /// # 引数
    /// * `outcome` - ピッカー操作の結果
    ///
    /// # 戻り値
    /// 成功時はOk(())、サイズ上限超過時はエラー
    ///
    /// キャンセルは何もしない
    pub fn attach_picked(&mut self, outcome: PickerOutcome) -> AppResult<()> {
        match outcome {
            PickerOutcome::Picked(file) => self.attach(file),
            PickerOutcome::Cancelled => {
                log::debug!("ファイル選択がキャンセルされました");
                Ok(())
            }
        }
    }

    /// カメラ撮影の結果をスロットに反映する
    ///
    /// # 引数
    /// * `permission` - カメラ使用許可の状態
    /// * `outcome` - 撮影操作の結果
    ///
    /// # 戻り値
    /// 成功時はOk(())
    ///
    /// 許可が拒否された場合、およびキャンセルの場合はスロットを変更しない
    pub fn attach_captured(
        &mut self,
        permission: CameraPermission,
        outcome: CaptureOutcome,
    ) -> AppResult<()> {
        if permission == CameraPermission::Denied {
            log::warn!("カメラ使用許可がないため撮影できません");
            return Ok(());
        }

        match outcome {
            CaptureOutcome::Captured(photo) => self.attach(photo.into()),
            CaptureOutcome::Cancelled => {
                log::debug!("カメラ撮影がキャンセルされました");
                Ok(())
            }
        }
    }

    /// 選択をクリアする
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// 選択中のファイル参照を取得する
    pub fn selected(&self) -> Option<&PickedFile> {
        self.selected.as_ref()
    }

    /// 経費レコードに記録する添付ファイル数を取得する
    ///
    /// # 戻り値
    /// 選択中のファイルがあれば1、なければ0
    pub fn attachment_count(&self) -> u32 {
        if self.selected.is_some() {
            1
        } else {
            0
        }
    }

    /// 選択中のファイルのURIを取得する
    pub fn uri(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.uri.as_str())
    }
}
