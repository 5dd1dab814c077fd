use crate::domain::a002_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::shared::config::app_config;
use crate::shared::format::{format_clp, format_int};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_list::{FilterHeader, ListFooter, ResourceListController, RowActions};
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

fn thumbnail(product: &Product) -> impl IntoView {
    match &product.image {
        Some(media) => {
            let src = app_config().media_url(media.thumbnail_url());
            view! { <img class="table__thumb" src=src alt=product.name.clone() /> }.into_any()
        }
        None => view! { <div class="table__thumb table__thumb--empty">{icon("products")}</div> }
            .into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let notifier = use_notifications();
    let list = ResourceListController::<Product>::new();
    let details = ProductDetailsViewModel::new(list, notifier);
    let actions = RowActions::new(list, details.opener(), notifier);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Productos"}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| actions.add()>
                        {icon("plus")}
                        {"Agregar"}
                    </Button>
                </div>
            </div>

            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Imagen"}</th>
                            <FilterHeader list=list key="barcode" />
                            <FilterHeader list=list key="name" />
                            <th>{"Categoría"}</th>
                            <th class="table__number">{"Precio"}</th>
                            <th class="table__number">{"Stock"}</th>
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
                            children=move |row: Product| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <tr>
                                        <td>{thumbnail(&row)}</td>
                                        <td>{row.barcode.clone()}</td>
                                        <td>{row.name.clone()}</td>
                                        <td>{row.category_label().to_string()}</td>
                                        <td class="table__number">{row.price.map(format_clp).unwrap_or_default()}</td>
                                        <td class="table__number">{row.stock.map(format_int).unwrap_or_default()}</td>
                                        <td class="table__actions">
                                            <button
                                                class="button button--icon"
                                                title="Editar"
                                                on:click=move |_| actions.edit(for_edit.clone())
                                            >
                                                {icon("edit")}
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
            <ProductDetails vm=details />
        </div>
    }
}
