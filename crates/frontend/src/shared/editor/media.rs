use contracts::shared::media::MediaRef;

/// Состояние загрузки вложения в форме.
///
/// Вложение хранится в значениях формы; здесь только ход загрузки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaUpload {
    pub uploading: bool,
    pub progress: u8,
    issued: u64,
}

/// Чем закончилась загрузка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome<E> {
    Attached,
    Failed(E),
    Stale,
}

impl MediaUpload {
    /// Начать загрузку; прежняя незавершённая становится устаревшей
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.uploading = true;
        self.progress = 0;
        self.issued
    }

    pub fn set_progress(&mut self, ticket: u64, percent: u8) {
        if ticket == self.issued && self.uploading {
            self.progress = percent.min(100);
        }
    }

    /// `true`, если результат относится к последней загрузке
    pub fn finish(&mut self, ticket: u64) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.uploading = false;
        true
    }

    /// Применить результат загрузки к вложению формы.
    ///
    /// Успех заменяет вложение; ошибка и устаревший результат оставляют прежнее.
    pub fn settle<E>(
        &mut self,
        ticket: u64,
        result: Result<MediaRef, E>,
        attached: &mut Option<MediaRef>,
    ) -> UploadOutcome<E> {
        if !self.finish(ticket) {
            return UploadOutcome::Stale;
        }
        match result {
            Ok(media) => {
                *attached = Some(media);
                UploadOutcome::Attached
            }
            Err(e) => UploadOutcome::Failed(e),
        }
    }

    /// Сбросить при открытии формы
    pub fn reset(&mut self) {
        self.issued += 1;
        self.uploading = false;
        self.progress = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(id: i64) -> MediaRef {
        MediaRef {
            id,
            url: format!("/uploads/{id}.png"),
            formats: None,
        }
    }

    #[test]
    fn test_progress_follows_latest_upload() {
        let mut upload = MediaUpload::default();
        let first = upload.begin();
        upload.set_progress(first, 40);
        let second = upload.begin();
        upload.set_progress(first, 90);
        assert_eq!(upload.progress, 0);
        upload.set_progress(second, 55);
        assert_eq!(upload.progress, 55);
        assert!(!upload.finish(first));
        assert!(upload.uploading);
        assert!(upload.finish(second));
        assert!(!upload.uploading);
    }

    #[test]
    fn test_reset_discards_inflight_upload() {
        let mut upload = MediaUpload::default();
        let ticket = upload.begin();
        upload.reset();
        assert!(!upload.uploading);
        assert!(!upload.finish(ticket));
    }

    #[test]
    fn test_success_replaces_attachment() {
        let mut upload = MediaUpload::default();
        let mut attached = Some(media(1));
        let ticket = upload.begin();
        let outcome = upload.settle::<String>(ticket, Ok(media(2)), &mut attached);
        assert_eq!(outcome, UploadOutcome::Attached);
        assert_eq!(attached.map(|m| m.id), Some(2));
        assert!(!upload.uploading);
    }

    #[test]
    fn test_failure_keeps_previous_attachment() {
        let mut upload = MediaUpload::default();
        let mut attached = Some(media(1));
        let ticket = upload.begin();
        let outcome = upload.settle(ticket, Err("413"), &mut attached);
        assert_eq!(outcome, UploadOutcome::Failed("413"));
        assert_eq!(attached.map(|m| m.id), Some(1));
        assert!(!upload.uploading);
    }

    #[test]
    fn test_stale_success_is_ignored() {
        let mut upload = MediaUpload::default();
        let mut attached = None;
        let first = upload.begin();
        let _second = upload.begin();
        let outcome = upload.settle::<String>(first, Ok(media(3)), &mut attached);
        assert_eq!(outcome, UploadOutcome::Stale);
        assert!(attached.is_none());
        assert!(upload.uploading);
    }
}
