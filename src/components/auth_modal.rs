//! Stored-passcode gate shown before the gallery loads.

use web_sys::HtmlInputElement;
use yew::prelude::*;

const PASSCODE: &str = "1558";
const AUTH_STORAGE_KEY: &str = "schemaview_auth";

/// True if a previous session already unlocked on this browser.
pub fn is_unlocked() -> bool {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(saved)) = store.get_item(AUTH_STORAGE_KEY) {
                return saved == PASSCODE;
            }
        }
    }
    false
}

fn remember_unlock() {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(AUTH_STORAGE_KEY, PASSCODE);
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AuthModalProps {
    pub on_unlock: Callback<()>,
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let input_ref = use_node_ref();
    let failed = use_state(|| false);

    let attempt = {
        let input_ref = input_ref.clone();
        let failed = failed.clone();
        let on_unlock = props.on_unlock.clone();
        Callback::from(move |_: ()| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if input.value() == PASSCODE {
                remember_unlock();
                on_unlock.emit(());
            } else {
                failed.set(true);
            }
        })
    };

    let on_click = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.emit(()))
    };
    let on_keydown = {
        let attempt = attempt.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                attempt.emit(());
            }
        })
    };

    html! {
        <div style="position:fixed; inset:0; background:#0e1116; display:flex; align-items:center; justify-content:center; z-index:100;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:28px 32px; min-width:320px; display:flex; flex-direction:column; gap:14px;">
                <h2 style="margin:0; font-size:18px; color:#fff; text-align:center;">{"SchemaView"}</h2>
                <p style="margin:0; font-size:13px; color:#8b949e; text-align:center;">{"Enter the access code to continue."}</p>
                <input
                    ref={input_ref}
                    type="password"
                    placeholder="Access code"
                    onkeydown={on_keydown}
                    style={format!(
                        "padding:10px 12px; border-radius:8px; background:#0e1116; color:#fff; font-size:14px; border:1px solid {};",
                        if *failed { "#f85149" } else { "#30363d" }
                    )}
                />
                if *failed {
                    <div style="font-size:12px; color:#f85149;">{"Wrong code, try again."}</div>
                }
                <button
                    onclick={on_click}
                    style="background:#1f6feb; border:none; color:#fff; padding:10px; border-radius:8px; font-size:14px; font-weight:600; cursor:pointer;"
                >{"Unlock"}</button>
            </div>
        </div>
    }
}
