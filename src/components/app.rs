//! Application shell: access gate, sidebar + gallery wiring, and the single
//! lightbox slot. Exactly one overlay can be open; opening another asset
//! replaces it and closing twice is a no-op.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::auth_modal::{AuthModal, is_unlocked};
use super::gallery_view::GalleryView;
use super::lightbox::Lightbox;
use super::sidebar::Sidebar;
use crate::model::{ImageAsset, Topic};
use crate::services::GalleryService;

#[function_component(App)]
pub fn app() -> Html {
    let authed = use_state(is_unlocked);
    let topics = use_state(|| None::<Result<Vec<Topic>, String>>);
    let topics_reload = use_state(|| 0u32);
    let selected = use_state(|| None::<Topic>);
    let focused = use_state(|| None::<ImageAsset>);
    let sidebar_visible = use_state(|| true);
    let notice = use_state(|| None::<String>);

    {
        let topics = topics.clone();
        use_effect_with((*authed, *topics_reload), move |(authed, _)| {
            if *authed {
                let topics = topics.clone();
                spawn_local(async move {
                    match GalleryService::topics().await {
                        Ok(list) => {
                            log::info!("loaded {} topics", list.len());
                            topics.set(Some(Ok(list)));
                        }
                        Err(e) => {
                            log::error!("loading topics: {e}");
                            topics.set(Some(Err(e.to_string())));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_unlock = {
        let authed = authed.clone();
        Callback::from(move |_| authed.set(true))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |topic: Topic| selected.set(Some(topic)))
    };

    let on_create = {
        let topics_reload = topics_reload.clone();
        let notice = notice.clone();
        Callback::from(move |(title, icon): (String, String)| {
            let topics_reload = topics_reload.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match GalleryService::create_topic(&title, &icon).await {
                    Ok(topic) => {
                        log::info!("created topic {}", topic.id);
                        topics_reload.set(topics_reload.wrapping_add(1));
                    }
                    Err(e) => {
                        log::error!("creating topic: {e}");
                        notice.set(Some(format!("Could not create topic: {e}")));
                    }
                }
            });
        })
    };

    // Single-instance overlay slot. Opening while open replaces the asset
    // (the lightbox reinitializes its state for the new one).
    let on_open_asset = {
        let focused = focused.clone();
        Callback::from(move |asset: ImageAsset| focused.set(Some(asset)))
    };
    let on_close = {
        let focused = focused.clone();
        Callback::from(move |_| focused.set(None))
    };
    let on_decode_error = {
        let focused = focused.clone();
        let notice = notice.clone();
        Callback::from(move |msg: String| {
            notice.set(Some(msg));
            focused.set(None);
        })
    };
    let on_focus_change = {
        let sidebar_visible = sidebar_visible.clone();
        Callback::from(move |active: bool| sidebar_visible.set(!active))
    };

    if !*authed {
        return html! { <AuthModal on_unlock={on_unlock} /> };
    }

    let body = match &*topics {
        None => html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#58a6ff;">
                <p>{"Loading…"}</p>
            </div>
        },
        Some(Err(msg)) => html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#f85149; padding:40px;">
                <p>{format!("Connection error: {msg}")}</p>
            </div>
        },
        Some(Ok(list)) => html! {
            <>
                <Sidebar
                    topics={list.clone()}
                    selected={(*selected).as_ref().map(|t| t.id.clone())}
                    visible={*sidebar_visible}
                    on_select={on_select}
                    on_create={on_create}
                />
                <GalleryView topic={(*selected).clone()} on_open_asset={on_open_asset} />
            </>
        },
    };

    html! {
        <div style="display:flex; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#e6edf3;">
            { body }
            { for notice.iter().map(|msg| {
                let dismiss = {
                    let notice = notice.clone();
                    Callback::from(move |_| notice.set(None))
                };
                html! {
                    <div
                        onclick={dismiss}
                        style="position:fixed; top:18px; left:50%; transform:translateX(-50%); background:#161b22; border:1px solid #f85149; color:#f85149; padding:10px 18px; border-radius:10px; font-size:13px; z-index:2000; cursor:pointer;"
                    >{ msg.clone() }{" (click to dismiss)"}</div>
                }
            }) }
            { if let Some(asset) = (*focused).clone() {
                html! {
                    <Lightbox
                        asset={asset}
                        on_close={on_close}
                        on_decode_error={on_decode_error}
                        on_focus_change={on_focus_change}
                    />
                }
            } else {
                html! {}
            } }
        </div>
    }
}
