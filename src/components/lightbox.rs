//! Fullscreen overlay for a single image asset with wheel zoom and drag pan.
//!
//! The mount effect is the overlay's `open`: it binds wheel/mousedown on the
//! overlay surface and mousemove/mouseup/mouseleave on the window, so a drag
//! started inside the overlay survives the pointer leaving it. The effect's
//! destructor is `close`: every listener bound here is removed there, on all
//! exit paths, and the viewport state dies with the component.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::prelude::*;

use crate::model::ImageAsset;
use crate::state::ViewportState;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub asset: ImageAsset,
    pub on_close: Callback<()>,
    /// Decode failed; the host closes the overlay and surfaces the message.
    pub on_decode_error: Callback<String>,
    /// Focus mode entered (true) on open, exited (false) on close.
    pub on_focus_change: Callback<bool>,
}

/// Push the current transform onto the image wrapper. Called synchronously
/// from every mutating transition, before the next event can be handled.
fn apply_transform(wrapper: &NodeRef, viewport: &Rc<RefCell<ViewportState>>) {
    if let Some(el) = wrapper.cast::<HtmlElement>() {
        let vp = viewport.borrow();
        let _ = el.style().set_property("transform", &vp.css_transform());
        let _ = el.style().set_property(
            "cursor",
            if vp.is_dragging() { "grabbing" } else { "grab" },
        );
    }
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let overlay_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let viewport = use_mut_ref(ViewportState::default);
    let loaded = use_state(|| false);

    // Replacing the asset while open reinitializes: fresh state now, fresh
    // fit baseline once the new image decodes.
    {
        let viewport = viewport.clone();
        let wrapper_ref = wrapper_ref.clone();
        let loaded = loaded.clone();
        use_effect_with(props.asset.id.clone(), move |_| {
            *viewport.borrow_mut() = ViewportState::default();
            loaded.set(false);
            apply_transform(&wrapper_ref, &viewport);
            || ()
        });
    }

    // open(): focus signal + listener set. close() = the returned destructor.
    {
        let overlay_ref = overlay_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let viewport = viewport.clone();
        let on_close = props.on_close.clone();
        let on_focus_change = props.on_focus_change.clone();
        let asset_id = props.asset.id.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let overlay: HtmlElement = overlay_ref
                .cast::<HtmlElement>()
                .expect("overlay_ref not attached to an element");

            log::info!("lightbox open: asset {asset_id}");
            on_focus_change.emit(true);

            let wheel_cb = {
                let viewport = viewport.clone();
                let wrapper_ref = wrapper_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    viewport.borrow_mut().wheel(e.delta_y());
                    apply_transform(&wrapper_ref, &viewport);
                }) as Box<dyn FnMut(_)>)
            };
            overlay
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            let mousedown_cb = {
                let viewport = viewport.clone();
                let wrapper_ref = wrapper_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    e.prevent_default();
                    viewport
                        .borrow_mut()
                        .pointer_down(e.client_x() as f64, e.client_y() as f64);
                    apply_transform(&wrapper_ref, &viewport);
                }) as Box<dyn FnMut(_)>)
            };
            overlay
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Move and up live on the window, not the overlay: the drag must
            // not be lost when the pointer crosses the overlay's edge.
            let mousemove_cb = {
                let viewport = viewport.clone();
                let wrapper_ref = wrapper_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if !viewport.borrow().is_dragging() {
                        return;
                    }
                    e.prevent_default();
                    viewport
                        .borrow_mut()
                        .pointer_move(e.client_x() as f64, e.client_y() as f64);
                    apply_transform(&wrapper_ref, &viewport);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let mouseup_cb = {
                let viewport = viewport.clone();
                let wrapper_ref = wrapper_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    viewport.borrow_mut().pointer_up();
                    apply_transform(&wrapper_ref, &viewport);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            // Pointer left the page entirely: end the drag there too.
            let mouseleave_cb = {
                let viewport = viewport.clone();
                let wrapper_ref = wrapper_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    viewport.borrow_mut().pointer_up();
                    apply_transform(&wrapper_ref, &viewport);
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let keydown_cb = {
                let on_close = on_close.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        e.prevent_default();
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            let document_clone = document.clone();
            move || {
                let _ = overlay.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = overlay.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = document_clone.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                on_focus_change.emit(false);
                log::info!("lightbox closed");
                let _keep_alive = (
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &mouseleave_cb,
                    &keydown_cb,
                );
            }
        });
    }

    // Decode complete: natural dimensions are finally known, so compute the
    // fit against the mounted overlay's geometry. Exactly once per asset.
    let onload = {
        let overlay_ref = overlay_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let viewport = viewport.clone();
        let loaded = loaded.clone();
        Callback::from(move |e: Event| {
            let Some(img) = e.target().and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            let Some(overlay) = overlay_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = overlay.get_bounding_client_rect();
            let (nat_w, nat_h) = (img.natural_width() as f64, img.natural_height() as f64);
            if nat_w <= 0.0 || nat_h <= 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            viewport
                .borrow_mut()
                .fit(nat_w, nat_h, rect.width(), rect.height());
            apply_transform(&wrapper_ref, &viewport);
            loaded.set(true);
        })
    };

    let onerror = {
        let on_decode_error = props.on_decode_error.clone();
        let asset = props.asset.clone();
        Callback::from(move |_e: Event| {
            log::warn!("image decode failed: {}", asset.src);
            on_decode_error.emit(format!("Could not load \"{}\"", asset.title));
        })
    };

    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_btn = {
        let viewport = viewport.clone();
        let wrapper_ref = wrapper_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            viewport.borrow_mut().reset();
            apply_transform(&wrapper_ref, &viewport);
        })
    };
    // Keep button presses from starting a drag on the overlay underneath.
    let swallow_mousedown = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            ref={overlay_ref}
            style="position:fixed; inset:0; background:rgba(8,10,14,0.97); z-index:999; display:flex; align-items:center; justify-content:center; overflow:hidden; user-select:none;"
        >
            if !*loaded {
                <div style="position:absolute; color:#8b949e; font-size:14px;">{"Loading image…"}</div>
            }
            <div
                ref={wrapper_ref}
                style="display:flex; align-items:center; justify-content:center; width:100%; height:100%; cursor:grab; will-change:transform;"
            >
                <img
                    src={props.asset.src.clone()}
                    alt={props.asset.title.clone()}
                    {onload}
                    {onerror}
                    style={format!(
                        "max-width:none; max-height:none; pointer-events:none; box-shadow:0 8px 40px rgba(0,0,0,0.7); border-radius:2px; visibility:{};",
                        if *loaded { "visible" } else { "hidden" }
                    )}
                />
            </div>
            <button
                onclick={close_btn}
                onmousedown={swallow_mousedown.clone()}
                title="Close (Esc)"
                style="position:fixed; top:20px; right:24px; width:44px; height:44px; border-radius:50%; background:rgba(0,0,0,0.5); color:#fff; border:none; font-size:22px; cursor:pointer; z-index:1000;"
            >{"×"}</button>
            <button
                onclick={reset_btn}
                onmousedown={swallow_mousedown}
                title="Back to fitted view"
                style="position:fixed; bottom:28px; left:50%; transform:translateX(-50%); background:#161b22; border:1px solid #30363d; color:#fff; padding:8px 16px; border-radius:999px; font-size:13px; cursor:pointer; z-index:1000;"
            >{"Reset view"}</button>
        </div>
    }
}
