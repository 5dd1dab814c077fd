use crate::domain::a003_sale::ui::details::SaleDetails;
use crate::shared::format::{format_sale_date, format_total};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_list::{FilterHeader, ListFooter, ResourceListController, RowActions};
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;
use thaw::*;

/// Таблица фактур; используется списком продаж и месячным отчётом.
///
/// `fixed_date`: период задан страницей, колонка даты без фильтра.
#[component]
pub fn SalesTable(
    list: ResourceListController<Sale>,
    #[prop(optional)] fixed_date: bool,
) -> impl IntoView {
    let notifier = use_notifications();
    let viewing = RwSignal::new(None::<Sale>);
    let actions = RowActions::new(list, Callback::new(move |sale| viewing.set(sale)), notifier);

    view! {
        <div class="table-container">
            <table class="table">
                <thead>
                    <tr>
                        <FilterHeader list=list key="invoice_number" />
                        <FilterHeader list=list key="customer_name" />
                        <FilterHeader list=list key="customer_phone" />
                        <FilterHeader list=list key="customer_email" />
                        {if fixed_date {
                            view! { <th>{"Fecha"}</th> }.into_any()
                        } else {
                            view! { <FilterHeader list=list key="date" /> }.into_any()
                        }}
                        <th class="table__number">{"Total"}</th>
                        <th class="table__actions">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || list.is_loading()>
                        <tr class="table__loading">
                            <td colspan="7"><Spinner /></td>
                        </tr>
                    </Show>
                    <For
                        each=move || list.rows()
                        key=|row| row.document_id.clone()
                        children=move |row: Sale| {
                            let for_view = row.clone();
                            let for_delete = row.clone();
                            view! {
                                <tr>
                                    <td>{row.invoice_number.clone()}</td>
                                    <td>{row.customer_name.clone()}</td>
                                    <td>{row.customer_phone.clone()}</td>
                                    <td>{row.customer_email.clone()}</td>
                                    <td>{format_sale_date(row.date.as_deref())}</td>
                                    <td class="table__number">{format_total(row.total)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Ver Factura"
                                            on:click=move |_| actions.view(for_view.clone())
                                        >
                                            {icon("eye")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Borrar"
                                            on:click=move |_| actions.delete(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>

        <ListFooter list=list />
        <SaleDetails sale=viewing />
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    let list = ResourceListController::<Sale>::new();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Facturas de venta"}</h1>
                </div>
            </div>
            <SalesTable list=list />
        </div>
    }
}
