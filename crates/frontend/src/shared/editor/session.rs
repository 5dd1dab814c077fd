use contracts::shared::error::ApiError;
use contracts::shared::mutation::{save_request, EditorMode, MutationRequest};
use contracts::shared::resource::{EditorForm, ResourceRow};
use contracts::shared::validation::FieldErrors;

/// Состояние формы создания/редактирования за один цикл открытия.
///
/// `generation` растёт при каждом открытии; ответ на отправку из прошлого цикла
/// не трогает форму.
#[derive(Clone)]
pub struct EditorSession<F: EditorForm> {
    seed: Option<F::Row>,
    pub values: F,
    pub errors: FieldErrors,
    submitting: bool,
    generation: u64,
    open: bool,
}

impl<F: EditorForm> Default for EditorSession<F> {
    fn default() -> Self {
        Self {
            seed: None,
            values: F::default(),
            errors: FieldErrors::new(),
            submitting: false,
            generation: 0,
            open: false,
        }
    }
}

/// Отправка, готовая к выполнению
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub generation: u64,
    pub mode: EditorMode,
    pub request: MutationRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// Ошибки показаны у полей, запрос не отправлялся
    Invalid,
    /// Предыдущая отправка ещё не завершилась
    Busy,
    /// Запрос не собрать: нет `documentId` у записи или тело не кодируется
    Request(ApiError),
}

impl<F: EditorForm> EditorSession<F> {
    /// Открыть форму: значения из `seed` или по умолчанию, ошибки очищены
    pub fn open(&mut self, seed: Option<F::Row>) {
        self.values = seed.as_ref().map(F::from_row).unwrap_or_default();
        self.seed = seed;
        self.errors = FieldErrors::new();
        self.submitting = false;
        self.generation += 1;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> Option<&F::Row> {
        self.seed.as_ref()
    }

    pub fn mode(&self) -> EditorMode {
        let entity = self.seed.as_ref().map(ResourceRow::entity_ref);
        EditorMode::from_seed(entity.as_ref())
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    /// Изменить значения; ошибки поля остаются до следующей отправки
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.values);
    }

    /// Проверить форму и собрать запрос. При ошибке проверки сеть не трогается.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::Busy);
        }
        let payload = match self.values.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors = errors;
                return Err(SubmitBlocked::Invalid);
            }
        };
        self.errors = FieldErrors::new();

        let entity = self.seed.as_ref().map(ResourceRow::entity_ref);
        let request = save_request(
            <F::Row as ResourceRow>::COLLECTION,
            entity.as_ref(),
            &payload,
        )
        .map_err(SubmitBlocked::Request)?;

        self.submitting = true;
        Ok(PendingSubmit {
            generation: self.generation,
            mode: EditorMode::from_seed(entity.as_ref()),
            request,
        })
    }

    /// Применить результат отправки. `false`, если форма уже закрыта или переоткрыта.
    pub fn finish_submit(&mut self, generation: u64, success: bool) -> bool {
        if !self.open || generation != self.generation {
            return false;
        }
        self.submitting = false;
        if success {
            self.open = false;
        }
        true
    }
}
