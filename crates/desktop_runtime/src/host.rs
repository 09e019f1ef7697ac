//! Browser environment queries used by the desktop runtime.
//!
//! Every query has a non-wasm fallback so reducers, effects, and components stay usable in native
//! unit tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    icon_grid::GridMetrics,
    model::{DesktopLayoutConfig, Viewport, WindowSize},
};

/// Size assumed for a window frame that cannot be measured.
pub const FALLBACK_WINDOW_SIZE: WindowSize = WindowSize { w: 400, h: 300 };

/// Grid geometry plus the client-space origin of the grid content box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredIconGrid {
    pub origin_x: f64,
    pub origin_y: f64,
    pub metrics: GridMetrics,
}

impl MeasuredIconGrid {
    /// Converts client coordinates into coordinates local to the grid content box.
    pub fn local_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.origin_x, client_y - self.origin_y)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Host hooks for layout measurement and deferred scheduling.
pub struct DesktopHostContext {
    config: DesktopLayoutConfig,
}

impl DesktopHostContext {
    pub fn new(config: DesktopLayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DesktopLayoutConfig {
        &self.config
    }

    /// Full browser inner size.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = Viewport::default();
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.height);
                return Viewport { width, height };
            }
        }

        Viewport::default()
    }

    /// Rendered size of the element with `dom_id`.
    ///
    /// `None` when the element is missing from the document or has no layout box yet.
    pub fn measure_element(&self, dom_id: &str) -> Option<WindowSize> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = web_sys::window()?.document()?.get_element_by_id(dom_id)?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            let size = WindowSize {
                w: element.offset_width(),
                h: element.offset_height(),
            };
            return (size.w > 0 && size.h > 0).then_some(size);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dom_id;
            Some(FALLBACK_WINDOW_SIZE)
        }
    }

    /// Reads the icon grid's actual track counts, cell size, and gaps from the rendered element.
    pub fn measure_icon_grid(&self, dom_id: &str) -> Option<MeasuredIconGrid> {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::icon_grid::{parse_track_count, GridMeasurement};

            let window = web_sys::window()?;
            let element = window.document()?.get_element_by_id(dom_id)?;
            let rect = element.get_bounding_client_rect();
            let style = window.get_computed_style(&element).ok()??;
            let px = |name: &str| -> Option<f64> {
                style
                    .get_property_value(name)
                    .ok()?
                    .trim()
                    .trim_end_matches("px")
                    .parse::<f64>()
                    .ok()
            };

            let pad_left = px("padding-left").unwrap_or(0.0);
            let pad_right = px("padding-right").unwrap_or(0.0);
            let pad_top = px("padding-top").unwrap_or(0.0);
            let pad_bottom = px("padding-bottom").unwrap_or(0.0);
            let tracks = |name: &str| {
                style
                    .get_property_value(name)
                    .map(|value| parse_track_count(&value))
                    .unwrap_or(0)
            };

            let measurement = GridMeasurement {
                width: rect.width() - pad_left - pad_right,
                height: rect.height() - pad_top - pad_bottom,
                columns: tracks("grid-template-columns"),
                rows: tracks("grid-template-rows"),
                cell_width: px("grid-auto-columns")
                    .unwrap_or_else(|| f64::from(self.config.icon_cell_width)),
                cell_height: px("grid-auto-rows")
                    .unwrap_or_else(|| f64::from(self.config.icon_cell_height)),
            };
            return Some(MeasuredIconGrid {
                origin_x: rect.left() + pad_left,
                origin_y: rect.top() + pad_top,
                metrics: GridMetrics::from_measurement(measurement),
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dom_id;
            let viewport = self.viewport();
            let height = viewport.height - self.config.taskbar_height;
            let pad = f64::from(self.config.icon_grid_padding);
            Some(MeasuredIconGrid {
                origin_x: pad,
                origin_y: pad,
                metrics: GridMetrics::auto_fill(
                    f64::from(viewport.width),
                    f64::from(height),
                    &self.config,
                ),
            })
        }
    }

    /// Runs `callback` after the browser has completed the current layout pass.
    pub fn after_layout(&self, callback: impl FnOnce() + 'static) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                callback();
                return;
            };
            let callback = Closure::once_into_js(callback);
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
                .is_err()
            {
                leptos::logging::warn!("failed to schedule post-layout callback");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        callback();
    }
}
