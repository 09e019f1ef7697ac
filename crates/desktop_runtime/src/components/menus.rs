use super::*;
use crate::control_panel::ControlPanelState;
use desktop_app_contract::{AppControlPanel, MenuSelection};
use system_ui::{MenuBar, MenuBarButton, MenuItem, MenuSurface};

fn menu_surface_dom_id(window_dom_id: &str, menu_id: &str) -> String {
    format!("{window_dom_id}-menu-{menu_id}")
}

#[component]
/// Dropdown menu bar rendered above a hosted app's body.
pub(super) fn WindowControlPanel(
    window_dom_id: String,
    panel: AppControlPanel,
    selection: RwSignal<Option<MenuSelection>>,
) -> impl IntoView {
    let menus = create_rw_signal(ControlPanelState::default());

    // Menu bar buttons and surfaces stop mouse-down propagation, so anything reaching the window
    // is an outside click.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if menus.with_untracked(|menus| menus.open_menu().is_some()) {
            menus.update(ControlPanelState::close_all);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let select = move |menu_id: String, item_id: String| {
        selection.update(|current| {
            let sequence = current.as_ref().map(|s| s.sequence + 1).unwrap_or(1);
            *current = Some(MenuSelection {
                menu_id,
                item_id,
                sequence,
            });
        });
        menus.update(ControlPanelState::close_all);
    };

    let entries = panel
        .menus
        .into_iter()
        .map(|menu| {
            let surface_id = menu_surface_dom_id(&window_dom_id, &menu.id);
            let menu_id = store_value(menu.id.clone());
            let expanded = Signal::derive(move || menus.with(|m| m.is_open(&menu_id.get_value())));
            let items = store_value(menu.items);
            let render_items = move || {
                items
                    .get_value()
                    .into_iter()
                    .map(|item| {
                        let item_id = store_value(item.id);
                        view! {
                            <MenuItem
                                label=item.label
                                on_click=Callback::new(move |_| {
                                    select(menu_id.get_value(), item_id.get_value())
                                })
                            />
                        }
                    })
                    .collect_view()
            };

            view! {
                <MenuBarButton
                    id=format!("{surface_id}-button")
                    label=menu.label.clone()
                    aria_controls=surface_id.clone()
                    expanded=expanded
                    on_click=Callback::new(move |_| {
                        menus.update(|m| m.toggle(&menu_id.get_value()))
                    })
                />
                <Show when=move || expanded.get() fallback=|| ()>
                    <MenuSurface id=surface_id.clone() aria_label=menu.label.clone()>
                        {render_items()}
                    </MenuSurface>
                </Show>
            }
        })
        .collect_view();

    view! { <MenuBar aria_label="Window menu">{entries}</MenuBar> }
}
