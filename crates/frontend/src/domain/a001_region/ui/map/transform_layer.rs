use crate::shared::icons::icon;
use contracts::shared::region_map::viewport::{Size, Viewport};
use leptos::ev;
use leptos::prelude::*;
use web_sys::{PointerEvent, WheelEvent};

type Point = (f64, f64);

/// Movement in px before a press turns into a drag. Below it the press stays
/// a click on the region underneath.
const DRAG_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackedPointer {
    id: i32,
    origin: Point,
    last: Point,
    captured: bool,
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn midpoint(a: Point, b: Point) -> Point {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Zoomable, pannable wrapper with wheel, drag, pinch and button controls.
///
/// `refresh` changes whenever the content is replaced; the layer re-measures
/// on every change, as well as on window resize.
#[component]
pub fn TransformLayer(#[prop(into)] refresh: Signal<u32>, children: Children) -> impl IntoView {
    let viewport = RwSignal::new(Viewport::default());
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();
    // Active pointers in container coordinates
    let pointers = StoredValue::new(Vec::<TrackedPointer>::new());

    let measure = move || {
        let (Some(wrapper), Some(content)) = (wrapper_ref.get_untracked(), content_ref.get_untracked())
        else {
            return;
        };
        let rect = wrapper.get_bounding_client_rect();
        let container = Size::new(rect.width(), rect.height());
        let content = Size::new(content.offset_width() as f64, content.offset_height() as f64);
        viewport.update(|v| v.set_bounds(container, content));
    };

    let local_point = move |client_x: i32, client_y: i32| -> Point {
        match wrapper_ref.get_untracked() {
            Some(wrapper) => {
                let rect = wrapper.get_bounding_client_rect();
                (client_x as f64 - rect.left(), client_y as f64 - rect.top())
            }
            None => (client_x as f64, client_y as f64),
        }
    };

    // Route the pointer's further events to the wrapper even outside it
    let capture = move |pointer_id: i32| {
        if let Some(wrapper) = wrapper_ref.get_untracked() {
            let _ = wrapper.set_pointer_capture(pointer_id);
        }
    };

    Effect::new(move |_| {
        refresh.track();
        if wrapper_ref.get().is_some() && content_ref.get().is_some() {
            measure();
        }
    });

    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        measure();
        let cursor = local_point(ev.client_x(), ev.client_y());
        viewport.update(|v| v.wheel(ev.delta_y(), cursor));
    };

    let on_pointer_down = move |ev: PointerEvent| {
        measure();
        let point = local_point(ev.client_x(), ev.client_y());
        pointers.update_value(|p| {
            p.retain(|tracked| tracked.id != ev.pointer_id());
            p.push(TrackedPointer {
                id: ev.pointer_id(),
                origin: point,
                last: point,
                captured: false,
            });
        });

        let pair = pointers.with_value(|p| (p.len() == 2).then(|| (p[0], p[1])));
        if let Some((a, b)) = pair {
            // A second finger makes this a pinch, both pointers belong to us
            for tracked in [a, b] {
                capture(tracked.id);
            }
            pointers.update_value(|p| p.iter_mut().for_each(|t| t.captured = true));
            viewport.update(|v| v.begin_pinch(distance(a.last, b.last)));
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        let point = local_point(ev.client_x(), ev.client_y());
        let mut previous = None;
        pointers.update_value(|p| {
            if let Some(tracked) = p.iter_mut().find(|t| t.id == ev.pointer_id()) {
                previous = Some(*tracked);
                tracked.last = point;
            }
        });
        let Some(previous) = previous else {
            return;
        };

        let pair = pointers.with_value(|p| (p.len() == 2).then(|| (p[0].last, p[1].last)));
        match pair {
            Some((a, b)) => {
                viewport.update(|v| {
                    v.pinch(distance(a, b), midpoint(a, b));
                });
            }
            None if ev.buttons() != 0 => {
                if !previous.captured && distance(previous.origin, point) >= DRAG_THRESHOLD {
                    capture(previous.id);
                    pointers.update_value(|p| {
                        if let Some(tracked) = p.iter_mut().find(|t| t.id == previous.id) {
                            tracked.captured = true;
                        }
                    });
                }
                viewport.update(|v| v.pan_by(point.0 - previous.last.0, point.1 - previous.last.1));
            }
            None => {}
        }
    };

    let on_pointer_end = move |ev: PointerEvent| {
        pointers.update_value(|p| p.retain(|tracked| tracked.id != ev.pointer_id()));
        if pointers.with_value(|p| p.len() < 2) {
            viewport.update(|v| v.end_pinch());
        }
    };

    let on_double_click = move |ev: web_sys::MouseEvent| {
        let point = local_point(ev.client_x(), ev.client_y());
        viewport.update(|v| {
            v.double_click(point);
        });
    };

    let on_measure = Callback::new(move |_: ()| measure());

    view! {
        <div
            class="region-map__viewport"
            style="touch-action: none;"
            node_ref=wrapper_ref
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_end
            on:dblclick=on_double_click
        >
            <ZoomControls viewport=viewport on_measure=on_measure />
            <div
                class="region-map__content"
                node_ref=content_ref
                style=move || format!(
                    "transform: {}; transform-origin: 0 0;",
                    viewport.with(|v| v.transform().css())
                )
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ZoomControls(viewport: RwSignal<Viewport>, on_measure: Callback<()>) -> impl IntoView {
    view! {
        // Buttons must not start a drag on the map underneath
        <div class="region-map__controls" on:pointerdown=|ev: PointerEvent| ev.stop_propagation()>
            <button
                class="region-map__control"
                title="Zoom In"
                on:click=move |_| {
                    on_measure.run(());
                    viewport.update(|v| v.zoom_in());
                }
            >
                {icon("zoom-in")}
            </button>
            <button
                class="region-map__control"
                title="Zoom Out"
                on:click=move |_| {
                    on_measure.run(());
                    viewport.update(|v| v.zoom_out());
                }
            >
                {icon("zoom-out")}
            </button>
            <button
                class="region-map__control"
                title="Reset View"
                on:click=move |_| {
                    on_measure.run(());
                    viewport.update(|v| v.reset());
                }
            >
                {icon("reset")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((2.0, 2.0), (2.0, 2.0)), 0.0);
        assert_eq!(distance((-1.0, 0.0), (1.0, 0.0)), 2.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint((0.0, 0.0), (10.0, 4.0)), (5.0, 2.0));
        assert_eq!(midpoint((-2.0, 6.0), (2.0, -6.0)), (0.0, 0.0));
    }

    #[test]
    fn test_drag_threshold_separates_clicks_from_drags() {
        let origin = (100.0, 100.0);
        assert!(distance(origin, (101.0, 102.0)) < DRAG_THRESHOLD);
        assert!(distance(origin, (104.0, 100.0)) >= DRAG_THRESHOLD);
    }
}
