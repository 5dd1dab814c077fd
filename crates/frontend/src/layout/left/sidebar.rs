//! Боковое меню с группами страниц

use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: &'static [PageKey],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Inicio",
        items: &[PageKey::Dashboard],
    },
    MenuGroup {
        label: "Inventario",
        items: &[PageKey::Categories, PageKey::Products],
    },
    MenuGroup {
        label: "Ventas",
        items: &[PageKey::Sales, PageKey::MonthlySales],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS.iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.iter().copied().map(|page| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.get() == page
                                    on:click=move |_| ctx.open_page(page)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(page.icon())}
                                        <span>{page.label()}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
