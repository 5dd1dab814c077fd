use super::ResourceListController;
use crate::shared::api;
use crate::shared::confirm::confirm;
use crate::shared::notifications::NotificationService;
use contracts::shared::error::ApiError;
use contracts::shared::mutation::{delete_request, MutationRequest};
use contracts::shared::resource::ResourceRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Запрос удаления, если пользователь подтвердил; отказ ничего не делает.
///
/// Запись без `documentId` отклоняется до вопроса пользователю.
pub fn plan_delete<R: ResourceRow>(
    row: &R,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<MutationRequest>, ApiError> {
    let request = delete_request(R::COLLECTION, &row.entity_ref())?;
    Ok(confirm(&row.delete_prompt()).then_some(request))
}

/// Действия над строкой списка
pub struct RowActions<R: ResourceRow> {
    list: ResourceListController<R>,
    /// Открыть панель строки: `Some(row)` для изменения или просмотра, `None` для создания
    open_editor: Callback<Option<R>>,
    notifier: NotificationService,
}

impl<R: ResourceRow> Clone for RowActions<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ResourceRow> Copy for RowActions<R> {}

impl<R: ResourceRow> RowActions<R> {
    pub fn new(
        list: ResourceListController<R>,
        open_editor: Callback<Option<R>>,
        notifier: NotificationService,
    ) -> Self {
        Self {
            list,
            open_editor,
            notifier,
        }
    }

    pub fn edit(&self, row: R) {
        self.open_editor.run(Some(row));
    }

    /// Открыть строку в панели только для чтения (фактуры)
    pub fn view(&self, row: R) {
        self.open_editor.run(Some(row));
    }

    pub fn add(&self) {
        self.open_editor.run(None);
    }

    /// Подтверждение, DELETE по documentId, перезагрузка списка, уведомление
    pub fn delete(&self, row: R) {
        let request = match plan_delete(&row, confirm) {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                log::error!("Cannot delete: {}", e);
                self.notifier.error(R::MESSAGES.delete_failed);
                return;
            }
        };
        let list = self.list;
        let notifier = self.notifier;
        spawn_local(async move {
            match api::execute(&request).await {
                Ok(()) => {
                    list.reload().await;
                    notifier.success(R::MESSAGES.deleted);
                }
                Err(e) => {
                    log::error!("{} {} failed: {}", request.method.as_str(), request.path, e);
                    notifier.error(R::MESSAGES.delete_failed);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::Product;
    use contracts::shared::mutation::Method;

    fn product() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": 15,
            "documentId": "abc123",
            "name": "Pepsi 2L"
        }))
        .unwrap()
    }

    #[test]
    fn test_confirmed_delete_targets_document_id() {
        let req = plan_delete(&product(), |_| true).unwrap().unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/api/products/abc123");
    }

    #[test]
    fn test_cancelled_delete_is_noop() {
        assert_eq!(plan_delete(&product(), |_| false), Ok(None));
    }

    #[test]
    fn test_row_without_document_id_is_refused_before_prompt() {
        let row: Product = serde_json::from_value(serde_json::json!({"id": 7, "name": "X"})).unwrap();
        let mut asked = false;
        let planned = plan_delete(&row, |_| {
            asked = true;
            true
        });
        assert!(planned.is_err());
        assert!(!asked);
    }

    #[test]
    fn test_delete_prompt_names_entity() {
        assert_eq!(
            product().delete_prompt(),
            "Estás seguro de borrar el producto \"Pepsi 2L\"?"
        );
    }
}
