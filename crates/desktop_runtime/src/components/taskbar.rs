use std::time::Duration;

use super::*;
use crate::{
    model::TaskbarEntry,
    taskbar::{format_clock, ClockConfig, ClockSnapshot, StartBadge},
};
use system_ui::{ClockButton, Taskbar, TaskbarButton, TaskbarSection, TaskbarStartBadge};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_config = ClockConfig::default();
    let start = StartBadge::default();
    let clock_now = create_rw_signal(ClockSnapshot::now());

    // The tick may land after the taskbar has been torn down; `try_set` tolerates a disposed
    // signal.
    if let Ok(interval) = set_interval_with_handle(
        move || {
            let _ = clock_now.try_set(ClockSnapshot::now());
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = move || runtime.taskbar.with(|taskbar| taskbar.entries().to_vec());
    let clock_text = Signal::derive(move || format_clock(clock_now.get(), clock_config));

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarStartBadge label=start.label icon_src=start.icon_ref />
            </TaskbarSection>
            <TaskbarSection ui_slot="tabs" aria_label="Open windows">
                <For
                    each=entries
                    key=|entry: &TaskbarEntry| (entry.window_id.clone(), entry.label.clone())
                    let:entry
                >
                    <TaskbarTab entry=entry />
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="clock">
                <ClockButton id="taskbar-clock" text=clock_text />
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarTab(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = entry.dom_id();
    let window_id = store_value(entry.window_id);
    let pressed = Signal::derive(move || {
        runtime
            .focus_broadcast
            .with(|focused| focused.as_ref() == Some(&window_id.get_value()))
    });

    view! {
        <TaskbarButton
            id=dom_id
            label=entry.label
            pressed=pressed
            on_click=Callback::new(move |_| {
                runtime.publish(ShellMessage::TabClicked(window_id.get_value()))
            })
        />
    }
}
