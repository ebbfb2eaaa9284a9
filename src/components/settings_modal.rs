use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub show_popups: bool,
    pub on_toggle_popups: Callback<()>,
    pub tree_shake: bool,
    pub on_toggle_shake: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_popups_cb = {
        let cb = props.on_toggle_popups.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_shake_cb = {
        let cb = props.on_toggle_shake.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:rgba(28,20,12,0.97); border:1px solid #5c4326; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px; color:#f3e9d2;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_popups} onclick={toggle_popups_cb} />
                    <span>{"Show chop popups"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.tree_shake} onclick={toggle_shake_cb} />
                    <span>{"Tree shake"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Both toggles are remembered between sessions."}</div>
        </div>
    </div>}
}
