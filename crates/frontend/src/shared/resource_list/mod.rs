//! Список ресурса с серверной пагинацией и фильтрами колонок.
//!
//! - state.rs: строки, метаданные, флаг загрузки, отбрасывание устаревших ответов
//! - actions.rs: действия над строкой (редактировать, добавить, удалить)
//! - view.rs: подвал списка и заголовок колонки с фильтром

pub mod actions;
pub mod state;
pub mod view;

pub use actions::RowActions;
pub use state::{ApplyOutcome, FetchTicket, ListState};
pub use view::{FilterHeader, ListFooter};

use crate::shared::api;
use contracts::shared::pagination::PaginationMeta;
use contracts::shared::query::{Constraint, FilterField, FilterValue, ListQuery, PageSize, QueryState};
use contracts::shared::resource::ResourceRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Контроллер списка одного ресурса.
///
/// Изменение `query` запускает загрузку страницы; ответ применяется, только если
/// за это время не был выдан более новый запрос.
pub struct ResourceListController<R: ResourceRow> {
    pub query: RwSignal<QueryState>,
    pub state: RwSignal<ListState<R>>,
    fixed: StoredValue<Vec<Constraint>>,
}

impl<R: ResourceRow> Clone for ResourceListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ResourceRow> Copy for ResourceListController<R> {}

impl<R: ResourceRow> ResourceListController<R> {
    pub fn new() -> Self {
        Self::with_fixed(Vec::new())
    }

    /// `fixed` добавляется к каждому запросу и не зависит от фильтров колонок
    pub fn with_fixed(fixed: Vec<Constraint>) -> Self {
        let this = Self {
            query: RwSignal::new(QueryState::default()),
            state: RwSignal::new(ListState::default()),
            fixed: StoredValue::new(fixed),
        };

        Effect::new(move |_| {
            let query = this.query.get();
            this.spawn_fetch(query);
        });

        this
    }

    fn query_string(&self, query: &QueryState) -> String {
        self.fixed.with_value(|fixed| {
            ListQuery::new(query)
                .fields(R::FILTERS)
                .populate(R::POPULATE)
                .fixed(fixed)
                .to_query_string()
        })
    }

    fn spawn_fetch(&self, query: QueryState) {
        let this = *self;
        spawn_local(async move {
            this.fetch(query).await;
        });
    }

    async fn fetch(&self, query: QueryState) {
        let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let query_string = self.query_string(&query);
        let result = api::fetch_list::<R>(&query_string).await;
        if let Err(e) = &result {
            log::error!("Failed to load /api/{}: {}", R::COLLECTION, e);
        }
        if let Some(ApplyOutcome::Stale) = self.state.try_update(|s| s.apply(ticket, result)) {
            log::debug!("Discarded stale /api/{} response", R::COLLECTION);
        }
    }

    /// Перезагрузить текущую страницу и дождаться результата
    pub async fn reload(&self) {
        let Some(query) = self.query.try_get_untracked() else {
            return;
        };
        self.fetch(query).await;
    }

    /// Перезагрузить текущую страницу в фоне
    pub fn refresh(&self) {
        if let Some(query) = self.query.try_get_untracked() {
            self.spawn_fetch(query);
        }
    }

    pub fn set_page(&self, page: u32) {
        let meta = self.meta_untracked();
        self.query.update(|q| q.set_page(meta.clamp_page(page)));
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.query.update(|q| q.set_page_size(size));
    }

    pub fn set_filter(&self, key: &str, value: Option<FilterValue>) {
        self.query.update(|q| q.set_filter(key, value));
    }

    pub fn filter_value(&self, key: &str) -> Option<FilterValue> {
        self.query.with(|q| q.filter(key).cloned())
    }

    pub fn filter_field(key: &str) -> Option<FilterField> {
        R::FILTERS.iter().copied().find(|f| f.key == key)
    }

    pub fn rows(&self) -> Vec<R> {
        self.state.with(|s| s.rows.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn meta(&self) -> PaginationMeta {
        self.state.with(|s| s.meta)
    }

    fn meta_untracked(&self) -> PaginationMeta {
        self.state.with_untracked(|s| s.meta)
    }

    pub fn range_label(&self) -> String {
        self.state.with(|s| s.range_label())
    }
}

impl<R: ResourceRow> Default for ResourceListController<R> {
    fn default() -> Self {
        Self::new()
    }
}
