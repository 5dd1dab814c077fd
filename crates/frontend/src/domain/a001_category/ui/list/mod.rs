use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::editor::EditorViewModel;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_list::{FilterHeader, ListFooter, ResourceListController, RowActions};
use contracts::domain::a001_category::aggregate::{Category, CategoryForm};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let notifier = use_notifications();
    let list = ResourceListController::<Category>::new();
    let editor = EditorViewModel::<CategoryForm>::new(list, notifier);
    let actions = RowActions::new(list, editor.opener(), notifier);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Categorías"}</h1>
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
                            <FilterHeader list=list key="name" />
                            <th>{"Descripción"}</th>
                            <th class="table__actions">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || list.is_loading()>
                            <tr class="table__loading">
                                <td colspan="3"><Spinner /></td>
                            </tr>
                        </Show>
                        <For
                            each=move || list.rows()
                            key=|row| row.document_id.clone()
                            children=move |row: Category| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <tr>
                                        <td>{row.name.clone()}</td>
                                        <td>{row.description.clone().unwrap_or_else(|| "-".to_string())}</td>
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
            <CategoryDetails editor=editor />
        </div>
    }
}
