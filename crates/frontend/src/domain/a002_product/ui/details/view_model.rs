use super::model;
use crate::shared::editor::{EditorViewModel, MediaUpload, UploadOutcome};
use crate::shared::notifications::NotificationService;
use crate::shared::resource_list::ResourceListController;
use crate::shared::upload::upload_file;
use contracts::domain::a002_product::aggregate::{CategoryOption, Product, ProductForm};
use contracts::shared::media::MediaRef;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// ViewModel формы товара: форма, список категорий, загрузка изображения
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub editor: EditorViewModel<ProductForm>,
    pub categories: RwSignal<Vec<CategoryOption>>,
    pub upload: RwSignal<MediaUpload>,
    notifier: NotificationService,
}

impl ProductDetailsViewModel {
    pub fn new(list: ResourceListController<Product>, notifier: NotificationService) -> Self {
        Self {
            editor: EditorViewModel::new(list, notifier),
            categories: RwSignal::new(Vec::new()),
            upload: RwSignal::new(MediaUpload::default()),
            notifier,
        }
    }

    /// Открыть форму и обновить список категорий; незавершённая загрузка
    /// прошлого открытия отбрасывается
    pub fn opener(&self) -> Callback<Option<Product>> {
        let this = *self;
        Callback::new(move |seed| {
            this.upload.update(|u| u.reset());
            this.editor.open(seed);
            this.load_categories();
        })
    }

    pub fn load_categories(&self) {
        let categories = self.categories;
        let notifier = self.notifier;
        spawn_local(async move {
            match model::fetch_category_options().await {
                Ok(options) => {
                    categories.try_set(options);
                }
                Err(e) => {
                    log::error!("Failed to load category options: {}", e);
                    notifier.error("Error al cargar categorías");
                }
            }
        });
    }

    /// Загрузить файл и прикрепить к форме. Сущность меняется только при сохранении.
    pub fn upload_image(&self, file: File) {
        let upload = self.upload;
        let editor = self.editor;
        let notifier = self.notifier;
        let Some(ticket) = upload.try_update(|u| u.begin()) else {
            return;
        };

        spawn_local(async move {
            let on_progress = move |percent: u8| {
                upload.try_update(|u| u.set_progress(ticket, percent));
            };
            let result = upload_file(file, on_progress).await;

            let outcome = editor
                .session
                .try_update(|s| {
                    upload.try_update(|u| u.settle(ticket, result, &mut s.values.image))
                })
                .flatten();
            match outcome {
                Some(UploadOutcome::Attached) => notifier.success("Imagen cargada con éxito"),
                Some(UploadOutcome::Failed(e)) => {
                    log::error!("Image upload failed: {}", e);
                    notifier.error("Imagen no pudo ser cargada");
                }
                Some(UploadOutcome::Stale) | None => log::debug!("Discarded stale upload result"),
            }
        });
    }

    pub fn clear_image(&self) {
        self.editor.edit(|f| f.image = None);
    }

    pub fn image(&self) -> Option<MediaRef> {
        self.editor.session.with(|s| s.values.image.clone())
    }
}
