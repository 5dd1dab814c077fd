use super::view_model::ProductDetailsViewModel;
use crate::shared::components::side_sheet::SideSheet;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use contracts::domain::a002_product::aggregate::ProductForm;
use contracts::shared::mutation::EditorMode;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

fn field_error(vm: ProductDetailsViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.editor
            .error(field)
            .map(|e| view! { <div class="field-error">{e}</div> })
    }
}

/// Текстовое поле формы товара
fn text_field(
    vm: ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || vm.editor.session.with(|s| get(&s.values))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.editor.edit(|f| set(f, value));
                }
            />
            {field_error(vm, id)}
        </div>
    }
}

#[component]
pub fn ProductDetails(vm: ProductDetailsViewModel) -> impl IntoView {
    let editor = vm.editor;
    let title = Signal::derive(move || match editor.mode() {
        EditorMode::Create => "Nuevo producto".to_string(),
        EditorMode::Edit => "Editar producto".to_string(),
    });
    let open = Signal::derive(move || editor.is_open());

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.upload_image(file);
        }
        input.set_value("");
    };

    let image_view = move || {
        vm.image().map(|media| {
            let src = app_config().media_url(media.thumbnail_url());
            view! {
                <div class="image-preview">
                    <img src=src alt="Imagen del producto" />
                    <button
                        class="button button--icon button--danger"
                        title="Quitar imagen"
                        on:click=move |_| vm.clear_image()
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    };

    view! {
        <SideSheet open=open title=title on_close=Callback::new(move |_| editor.close())>
            <div class="details-form">
                {text_field(vm, "name", "Nombre", "text", |f| f.name.clone(), |f, v| f.name = v)}

                <div class="form-group">
                    <label for="description">{"Descripción"}</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || editor.session.with(|s| s.values.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.edit(|f| f.description = value);
                        }
                    />
                </div>

                {text_field(vm, "price", "Precio", "number", |f| f.price.clone(), |f, v| f.price = v)}
                {text_field(vm, "stock", "Stock", "number", |f| f.stock.clone(), |f, v| f.stock = v)}
                {text_field(vm, "barcode", "Codigo", "text", |f| f.barcode.clone(), |f, v| f.barcode = v)}

                <div class="form-group">
                    <label for="category">{"Categoría"}</label>
                    <select
                        id="category"
                        prop:value=move || editor.session.with(|s| s.values.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            editor.edit(|f| f.category = value);
                        }
                    >
                        <option value="">{"Seleccione una categoría"}</option>
                        <For
                            each=move || vm.categories.get()
                            key=|option| option.document_id.clone()
                            children=move |option| {
                                let value = option.document_id.clone();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || editor.session.with(|s| s.values.category == selected_value)
                                    >
                                        {option.label}
                                    </option>
                                }
                            }
                        />
                    </select>
                    {field_error(vm, "category")}
                </div>

                <div class="form-group">
                    <label for="image">{"Imagen"}</label>
                    {image_view}
                    <label class="upload-button">
                        {icon("upload")}
                        <span>{"Subir imagen"}</span>
                        <input
                            type="file"
                            id="image"
                            accept="image/*"
                            class="upload-button__input"
                            disabled=move || vm.upload.with(|u| u.uploading)
                            on:change=on_file
                        />
                    </label>
                    <Show when=move || vm.upload.with(|u| u.uploading)>
                        <div class="upload-progress">
                            <div
                                class="upload-progress__bar"
                                style:width=move || format!("{}%", vm.upload.with(|u| u.progress))
                            ></div>
                            <span class="upload-progress__label">
                                {move || format!("{}%", vm.upload.with(|u| u.progress))}
                            </span>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=Signal::derive(move || editor.is_submitting())
                    disabled=Signal::derive(move || vm.upload.with(|u| u.uploading))
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
