use super::ResourceListController;
use crate::shared::components::column_filter::ColumnFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use contracts::shared::query::PageSize;
use contracts::shared::resource::ResourceRow;
use leptos::prelude::*;

/// Подвал списка: "Mostrando x a y de z registros" и переключатель страниц
#[component]
pub fn ListFooter<R: ResourceRow>(list: ResourceListController<R>) -> impl IntoView {
    let current_page = Signal::derive(move || list.query.with(|q| q.page()));
    let page_size = Signal::derive(move || list.query.with(|q| q.page_size().value()));
    let total_pages = Signal::derive(move || list.meta().last_page());

    let error = move || {
        list.state
            .with(|s| s.error.clone())
            .map(|e| view! { <span class="list-footer__error">{e}</span> })
    };

    view! {
        <div class="list-footer">
            <span class="list-footer__range">{move || list.range_label()}</span>
            {error}
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                page_size=page_size
                on_page_change=Callback::new(move |page: u32| list.set_page(page))
                on_page_size_change=Callback::new(move |size: u32| {
                    if let Some(size) = PageSize::from_value(size) {
                        list.set_page_size(size);
                    }
                })
            />
        </div>
    }
}

/// Заголовок колонки с фильтром по полю `key`
#[component]
pub fn FilterHeader<R: ResourceRow>(
    list: ResourceListController<R>,
    key: &'static str,
) -> impl IntoView {
    let Some(field) = ResourceListController::<R>::filter_field(key) else {
        log::warn!("No filter field '{}' on /api/{}", key, R::COLLECTION);
        return view! { <th>{key}</th> }.into_any();
    };

    let value = Signal::derive(move || list.filter_value(key));
    let on_change = Callback::new(move |v| list.set_filter(key, v));

    view! {
        <th>
            <ColumnFilter label=field.label kind=field.kind value=value on_change=on_change />
        </th>
    }
    .into_any()
}
