use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Боковая панель справа поверх страницы
#[component]
pub fn SideSheet(
    /// Whether the sheet is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Title of the sheet
    #[prop(into)]
    title: Signal<String>,
    /// Callback when sheet should close
    on_close: Callback<()>,
    /// Sheet content
    children: ChildrenFn,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && open.get_untracked() {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div class="sheet-overlay" on:click=move |_| on_close.run(())>
                <aside class="sheet" on:click=stop_propagation>
                    <div class="sheet__header">
                        <h2 class="sheet__title">{move || title.get()}</h2>
                        <button class="button button--icon sheet__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="sheet__body">
                        {children.with_value(|children| children())}
                    </div>
                </aside>
            </div>
        </Show>
    }
}
