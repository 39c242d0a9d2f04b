use yew::prelude::*;

use crate::model::Topic;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub topics: Vec<Topic>,
    pub selected: Option<String>,
    /// Collapsed while the lightbox has focus.
    pub visible: bool,
    pub on_select: Callback<Topic>,
    /// (title, icon) for a new topic.
    pub on_create: Callback<(String, String)>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let create_cb = {
        let cb = props.on_create.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(name)) = win.prompt_with_message("Name of the new topic:") {
                    let name = name.trim().to_string();
                    if !name.is_empty() {
                        cb.emit((name, "fa-folder".to_string()));
                    }
                }
            }
        })
    };

    let aside_style = format!(
        "width:280px; height:100vh; background:#161b22; border-right:1px solid #30363d; \
         display:flex; flex-direction:column; flex-shrink:0; z-index:20; \
         transition:margin-left 0.3s; margin-left:{};",
        if props.visible { "0" } else { "-280px" }
    );

    html! {
        <aside style={aside_style}>
            <div style="padding:20px; border-bottom:1px solid #30363d; display:flex; align-items:center; justify-content:space-between;">
                <h1 style="margin:0; font-size:19px; color:#fff;">{"SchemaView"}</h1>
                <button onclick={create_cb} title="Create topic" style="background:none; border:none; color:#8b949e; font-size:20px; cursor:pointer;">{"+"}</button>
            </div>
            <ul style="flex:1; overflow-y:auto; margin:0; padding:12px; list-style:none; display:flex; flex-direction:column; gap:4px;">
                { for props.topics.iter().map(|topic| {
                    let is_selected = props.selected.as_deref() == Some(topic.id.as_str());
                    let onclick = {
                        let cb = props.on_select.clone();
                        let topic = topic.clone();
                        Callback::from(move |_| cb.emit(topic.clone()))
                    };
                    let li_style = format!(
                        "display:flex; align-items:center; gap:10px; padding:10px 12px; border-radius:10px; cursor:pointer; font-size:14px; color:{}; background:{};",
                        if is_selected { "#fff" } else { "#8b949e" },
                        if is_selected { "#21262d" } else { "transparent" }
                    );
                    html! {
                        <li {onclick} style={li_style}>
                            <i class={format!("fa-solid {}", topic.icon.as_deref().unwrap_or("fa-folder"))}></i>
                            <span>{ &topic.title }</span>
                        </li>
                    }
                }) }
            </ul>
            <div style="padding:14px; border-top:1px solid #30363d; font-size:11px; text-align:center; color:#484f58;">
                {"v2.1 Full Management"}
            </div>
        </aside>
    }
}
