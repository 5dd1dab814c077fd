use crate::shared::icons::icon;
use contracts::shared::query::PageSize;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options (optional, defaults to 10/25/50)
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options
        .unwrap_or_else(|| PageSize::ALL.iter().map(|s| s.value()).collect());
    let last_page = move || total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <label class="pagination-size">
                <span>"Registros x pagina"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(val) = event_target_value(&ev).parse() {
                            on_page_size_change.run(val);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || format!("Pagina {} de {}", current_page.get(), last_page())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="Primera pagina"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Pagina anterior"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last_page() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last_page()
                title="Pagina siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page())
                disabled=move || current_page.get() >= last_page()
                title="Ultima pagina"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
