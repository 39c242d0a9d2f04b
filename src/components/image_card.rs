use yew::prelude::*;

use crate::model::ImageAsset;
use crate::util::format_bytes;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageCardProps {
    pub asset: ImageAsset,
    pub on_open: Callback<ImageAsset>,
    pub on_delete: Callback<ImageAsset>,
    /// (image id, new title)
    pub on_rename: Callback<(String, String)>,
}

#[function_component(ImageCard)]
pub fn image_card(props: &ImageCardProps) -> Html {
    let open_cb = {
        let cb = props.on_open.clone();
        let asset = props.asset.clone();
        Callback::from(move |_| cb.emit(asset.clone()))
    };

    let delete_cb = {
        let cb = props.on_delete.clone();
        let asset = props.asset.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Permanently delete this image?")
                    .unwrap_or(false)
                {
                    cb.emit(asset.clone());
                }
            }
        })
    };

    let rename_cb = {
        let cb = props.on_rename.clone();
        let asset = props.asset.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(title)) =
                    win.prompt_with_message_and_default("New title:", &asset.title)
                {
                    let title = title.trim().to_string();
                    if !title.is_empty() && title != asset.title {
                        cb.emit((asset.id.clone(), title));
                    }
                }
            }
        })
    };

    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden; display:flex; flex-direction:column; height:280px;">
            <div
                onclick={open_cb}
                title="Open fullscreen"
                style="flex:1; min-height:0; background:rgba(0,0,0,0.4); display:flex; align-items:center; justify-content:center; cursor:pointer; overflow:hidden;"
            >
                <img
                    src={props.asset.src.clone()}
                    alt={props.asset.title.clone()}
                    loading="lazy"
                    style="max-width:100%; max-height:100%; object-fit:contain; padding:12px;"
                />
            </div>
            <div style="padding:10px 12px; border-top:1px solid #30363d; display:flex; align-items:center; gap:8px;">
                <div style="flex:1; min-width:0;">
                    <div
                        onclick={rename_cb}
                        title="Click to rename"
                        style="font-size:13px; font-weight:600; color:#e6edf3; white-space:nowrap; overflow:hidden; text-overflow:ellipsis; cursor:text;"
                    >{ &props.asset.title }</div>
                    <div style="font-size:11px; color:#8b949e;">{ format_bytes(props.asset.size) }</div>
                </div>
                <button
                    onclick={delete_cb}
                    title="Delete"
                    style="background:none; border:none; color:#8b949e; cursor:pointer; padding:6px; font-size:14px;"
                >{"🗑"}</button>
            </div>
        </div>
    }
}
