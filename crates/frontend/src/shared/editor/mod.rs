//! Форма создания/редактирования в боковой панели.
//!
//! - session.rs: значения, ошибки полей, режим, отправка
//! - media.rs: ход загрузки вложения

pub mod media;
pub mod session;

pub use media::{MediaUpload, UploadOutcome};
pub use session::{EditorSession, PendingSubmit, SubmitBlocked};

use crate::shared::api;
use crate::shared::notifications::NotificationService;
use crate::shared::resource_list::ResourceListController;
use contracts::shared::mutation::EditorMode;
use contracts::shared::resource::{EditorForm, ResourceRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы ресурса: открытие по строке или пустой, сохранение, закрытие
pub struct EditorViewModel<F: EditorForm> {
    pub session: RwSignal<EditorSession<F>>,
    list: ResourceListController<F::Row>,
    notifier: NotificationService,
}

impl<F: EditorForm> Clone for EditorViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EditorForm> Copy for EditorViewModel<F> {}

impl<F: EditorForm> EditorViewModel<F> {
    pub fn new(list: ResourceListController<F::Row>, notifier: NotificationService) -> Self {
        Self {
            session: RwSignal::new(EditorSession::default()),
            list,
            notifier,
        }
    }

    pub fn open(&self, seed: Option<F::Row>) {
        self.session.update(|s| s.open(seed));
    }

    /// Обработчик для `RowActions`
    pub fn opener(&self) -> Callback<Option<F::Row>> {
        let this = *self;
        Callback::new(move |seed| this.open(seed))
    }

    pub fn close(&self) {
        self.session.update(|s| s.close());
    }

    pub fn is_open(&self) -> bool {
        self.session.with(|s| s.is_open())
    }

    pub fn is_submitting(&self) -> bool {
        self.session.with(|s| s.is_submitting())
    }

    pub fn mode(&self) -> EditorMode {
        self.session.with(|s| s.mode())
    }

    pub fn values(&self) -> F {
        self.session.with(|s| s.values.clone())
    }

    pub fn edit(&self, f: impl FnOnce(&mut F)) {
        self.session.update(|s| s.edit(f));
    }

    pub fn error(&self, field: &'static str) -> Option<String> {
        self.session.with(|s| s.error(field))
    }

    /// Проверить и отправить форму.
    ///
    /// Успех: уведомление, закрытие, перезагрузка списка. Ошибка: сообщение сервера
    /// или общий текст ресурса; форма остаётся открытой.
    pub fn save(&self) {
        let Some(outcome) = self.session.try_update(|s| s.begin_submit()) else {
            return;
        };
        let pending = match outcome {
            Ok(pending) => pending,
            Err(SubmitBlocked::Invalid) | Err(SubmitBlocked::Busy) => return,
            Err(SubmitBlocked::Request(e)) => {
                log::error!(
                    "Cannot submit to /api/{}: {}",
                    <F::Row as ResourceRow>::COLLECTION,
                    e
                );
                self.notifier.error(<F::Row as ResourceRow>::MESSAGES.save_failed);
                return;
            }
        };

        let this = *self;
        spawn_local(async move {
            let result = api::execute(&pending.request).await;
            let applied = this
                .session
                .try_update(|s| s.finish_submit(pending.generation, result.is_ok()))
                .unwrap_or(false);
            if !applied {
                log::debug!("Editor closed before {} finished", pending.request.path);
            }

            let messages = <F::Row as ResourceRow>::MESSAGES;
            match result {
                Ok(()) => {
                    this.notifier.success(match pending.mode {
                        EditorMode::Create => messages.created,
                        EditorMode::Edit => messages.updated,
                    });
                    this.list.refresh();
                }
                Err(e) => {
                    log::error!(
                        "{} {} failed: {}",
                        pending.request.method.as_str(),
                        pending.request.path,
                        e
                    );
                    this.notifier.error(e.message_or(messages.save_failed));
                }
            }
        });
    }
}
