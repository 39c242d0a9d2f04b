//! Image grid for the selected topic: fetch, upload, delete, rename.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::image_card::ImageCard;
use crate::model::{ImageAsset, Topic};
use crate::services::GalleryService;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryViewProps {
    pub topic: Option<Topic>,
    pub on_open_asset: Callback<ImageAsset>,
}

#[function_component(GalleryView)]
pub fn gallery_view(props: &GalleryViewProps) -> Html {
    // None while a fetch is in flight for the current topic.
    let images = use_state(|| None::<Result<Vec<ImageAsset>, String>>);
    let reload = use_state(|| 0u32);
    let uploading = use_state(|| false);
    let action_error = use_state(|| None::<String>);
    let file_input_ref = use_node_ref();

    let topic_id = props.topic.as_ref().map(|t| t.id.clone());

    {
        let images = images.clone();
        let action_error = action_error.clone();
        use_effect_with((topic_id.clone(), *reload), move |(topic_id, _)| {
            if let Some(id) = topic_id.clone() {
                images.set(None);
                action_error.set(None);
                let images = images.clone();
                spawn_local(async move {
                    match GalleryService::images(&id).await {
                        Ok(list) => images.set(Some(Ok(list))),
                        Err(e) => {
                            log::error!("fetching images for topic {id}: {e}");
                            images.set(Some(Err(e.to_string())));
                        }
                    }
                });
            }
            || ()
        });
    }

    let bump_reload = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(reload.wrapping_add(1)))
    };

    let pick_file = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_chosen = {
        let topic_id = topic_id.clone();
        let uploading = uploading.clone();
        let action_error = action_error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
                return;
            };
            input.set_value("");
            let Some(id) = topic_id.clone() else { return };
            let uploading = uploading.clone();
            let action_error = action_error.clone();
            let bump_reload = bump_reload.clone();
            uploading.set(true);
            spawn_local(async move {
                match GalleryService::upload_image(&id, file).await {
                    Ok(asset) => {
                        log::info!("uploaded {} as {}", asset.file_name, asset.id);
                        bump_reload.emit(());
                    }
                    Err(e) => {
                        log::error!("upload failed: {e}");
                        action_error.set(Some(format!("Upload failed: {e}")));
                    }
                }
                uploading.set(false);
            });
        })
    };

    let on_delete = {
        let action_error = action_error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |asset: ImageAsset| {
            let action_error = action_error.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                match GalleryService::delete_image(&asset.id).await {
                    Ok(()) => bump_reload.emit(()),
                    Err(e) => {
                        log::error!("deleting {}: {e}", asset.id);
                        action_error.set(Some(format!("Delete failed: {e}")));
                    }
                }
            });
        })
    };

    let on_rename = {
        let action_error = action_error.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |(id, title): (String, String)| {
            let action_error = action_error.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                match GalleryService::rename_image(&id, &title).await {
                    Ok(()) => bump_reload.emit(()),
                    Err(e) => {
                        log::error!("renaming {id}: {e}");
                        action_error.set(Some(format!("Rename failed: {e}")));
                    }
                }
            });
        })
    };

    let Some(topic) = props.topic.clone() else {
        return html! {
            <main style="flex:1; height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; color:#484f58;">
                <div style="font-size:48px; margin-bottom:12px;">{"🗂"}</div>
                <p style="font-size:16px;">{"Select a topic from the sidebar."}</p>
            </main>
        };
    };

    let content = match &*images {
        None => html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#58a6ff;">
                <p>{"Loading images…"}</p>
            </div>
        },
        Some(Err(msg)) => html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#f85149;">
                <p>{format!("Error loading images: {msg}")}</p>
            </div>
        },
        Some(Ok(list)) if list.is_empty() => html! {
            <div style="flex:1; display:flex; flex-direction:column; align-items:center; justify-content:center; margin:24px; border:2px dashed #30363d; border-radius:14px; color:#8b949e;">
                <p>{"Empty topic. Upload your first image!"}</p>
            </div>
        },
        Some(Ok(list)) => html! {
            <div style="flex:1; overflow-y:auto; padding:24px; display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:20px; align-content:start;">
                { for list.iter().map(|asset| html! {
                    <ImageCard
                        key={asset.id.clone()}
                        asset={asset.clone()}
                        on_open={props.on_open_asset.clone()}
                        on_delete={on_delete.clone()}
                        on_rename={on_rename.clone()}
                    />
                }) }
            </div>
        },
    };

    html! {
        <main style="flex:1; height:100vh; display:flex; flex-direction:column; background:#0e1116; position:relative; overflow:hidden;">
            <div style="padding:20px 24px 14px 24px; border-bottom:1px solid #30363d; display:flex; justify-content:space-between; align-items:flex-end;">
                <div>
                    <h2 style="margin:0 0 4px 0; font-size:22px; color:#fff;">{ &topic.title }</h2>
                    <p style="margin:0; font-size:13px; color:#8b949e;">
                        { topic.description.clone().unwrap_or_else(|| "Schema management".to_string()) }
                    </p>
                </div>
                <div>
                    <input
                        ref={file_input_ref}
                        type="file"
                        accept="image/*"
                        onchange={on_file_chosen}
                        style="display:none;"
                    />
                    <button
                        onclick={pick_file}
                        disabled={*uploading}
                        style="background:#1f6feb; border:none; color:#fff; padding:8px 16px; border-radius:8px; font-size:13px; font-weight:600; cursor:pointer;"
                    >
                        { if *uploading { "Uploading…" } else { "Upload image" } }
                    </button>
                </div>
            </div>
            { for action_error.iter().map(|msg| {
                let dismiss = {
                    let action_error = action_error.clone();
                    Callback::from(move |_| action_error.set(None))
                };
                html! {
                    <div onclick={dismiss} style="margin:12px 24px 0 24px; padding:10px 14px; background:rgba(248,81,73,0.15); border:1px solid #f85149; border-radius:8px; color:#f85149; font-size:13px; cursor:pointer;">
                        { msg.clone() }{" (click to dismiss)"}
                    </div>
                }
            }) }
            { content }
        </main>
    }
}
