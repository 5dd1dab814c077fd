use crate::shared::components::side_sheet::SideSheet;
use crate::shared::editor::EditorViewModel;
use contracts::domain::a001_category::aggregate::CategoryForm;
use contracts::shared::mutation::EditorMode;
use leptos::prelude::*;
use thaw::*;

/// Форма категории в боковой панели
#[component]
pub fn CategoryDetails(editor: EditorViewModel<CategoryForm>) -> impl IntoView {
    let title = Signal::derive(move || match editor.mode() {
        EditorMode::Create => "Nueva categoría".to_string(),
        EditorMode::Edit => "Editar categoría".to_string(),
    });
    let open = Signal::derive(move || editor.is_open());

    view! {
        <SideSheet open=open title=title on_close=Callback::new(move |_| editor.close())>
            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || editor.values().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.edit(|f| f.name = value);
                        }
                    />
                    {move || editor.error("name").map(|e| view! { <div class="field-error">{e}</div> })}
                </div>

                <div class="form-group">
                    <label for="category-description">{"Descripción"}</label>
                    <textarea
                        id="category-description"
                        rows="3"
                        prop:value=move || editor.values().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.edit(|f| f.description = value);
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=Signal::derive(move || editor.is_submitting())
                    on_click=move |_| editor.save()
                >
                    {"Guardar"}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editor.close()>
                    {"Cancelar"}
                </Button>
            </div>
        </SideSheet>
    }
}
