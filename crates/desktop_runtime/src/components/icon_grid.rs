use super::*;
use crate::{
    icon_grid::IconGridAction,
    model::{DragSubject, GridCell, IconId},
};
use leptos::ev::{DragEvent, MouseEvent};
use system_ui::{DesktopIconButton, DesktopIconGrid};

fn publish_icon(runtime: DesktopRuntimeContext, action: IconGridAction) {
    runtime.publish(ShellMessage::Icon(action));
}

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_ids = create_memo(move |_| {
        runtime
            .icons
            .with(|grid| grid.icons.iter().map(|icon| icon.id.clone()).collect::<Vec<_>>())
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        match runtime.host.get_value().measure_icon_grid(ICON_GRID_DOM_ID) {
            Some(grid) => publish_icon(
                runtime,
                IconGridAction::Reflow {
                    metrics: grid.metrics,
                },
            ),
            None => logging::warn!("icon grid not measurable; skipping reflow"),
        }
    });
    on_cleanup(move || resize_listener.remove());

    let on_click = Callback::new(move |_: MouseEvent| {
        publish_icon(runtime, IconGridAction::ClearSelection);
    });
    let on_drop = Callback::new(move |ev: DragEvent| {
        let Some(grid) = runtime.host.get_value().measure_icon_grid(ICON_GRID_DOM_ID) else {
            logging::warn!("icon grid not measurable; dropping icon back in place");
            return;
        };
        let (x, y) = grid.local_point(f64::from(ev.client_x()), f64::from(ev.client_y()));
        publish_icon(
            runtime,
            IconGridAction::Drop {
                x,
                y,
                metrics: grid.metrics,
            },
        );
    });

    view! {
        <DesktopIconGrid id=ICON_GRID_DOM_ID on_click=on_click on_drop=on_drop>
            <For
                each=move || icon_ids.get()
                key=|icon_id: &IconId| icon_id.clone()
                let:icon_id
            >
                <DesktopIcon icon_id=icon_id />
            </For>
        </DesktopIconGrid>
    }
}

#[component]
fn DesktopIcon(icon_id: IconId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(icon) = runtime.icons.with_untracked(|grid| grid.icon(&icon_id).cloned()) else {
        return ().into_view();
    };
    let id = store_value(icon_id);

    let cell = create_memo(move |_| {
        runtime.icons.with(|grid| {
            grid.icon(&id.get_value())
                .map(|icon| icon.cell)
                .unwrap_or(GridCell::new(1, 1))
        })
    });
    let selected = Signal::derive(move || {
        runtime
            .icons
            .with(|grid| grid.selected.as_ref() == Some(&id.get_value()))
    });
    let dragging = Signal::derive(move || {
        runtime.interaction.with(|interaction| {
            matches!(
                interaction.drag.as_ref().map(|session| &session.subject),
                Some(DragSubject::Icon(subject)) if *subject == id.get_value()
            )
        })
    });

    let on_click = Callback::new(move |ev: MouseEvent| {
        ev.stop_propagation();
        publish_icon(
            runtime,
            IconGridAction::Select {
                icon_id: id.get_value(),
            },
        );
    });
    let on_dblclick = Callback::new(move |_: MouseEvent| {
        publish_icon(
            runtime,
            IconGridAction::Activate {
                icon_id: id.get_value(),
            },
        );
    });
    let label = icon.label.clone();
    let on_dragstart = Callback::new(move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text/plain", &label);
        }
        publish_icon(
            runtime,
            IconGridAction::BeginDrag {
                icon_id: id.get_value(),
            },
        );
    });
    let on_dragend = Callback::new(move |_: DragEvent| {
        publish_icon(runtime, IconGridAction::EndDrag);
    });

    view! {
        <DesktopIconButton
            label=icon.label
            icon_src=icon.icon_ref
            column=Signal::derive(move || cell.get().column)
            row=Signal::derive(move || cell.get().row)
            selected=selected
            dragging=dragging
            on_click=on_click
            on_dblclick=on_dblclick
            on_dragstart=on_dragstart
            on_dragend=on_dragend
        />
    }
    .into_view()
}
