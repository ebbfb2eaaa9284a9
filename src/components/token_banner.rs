use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::util::clog;

/// Burn address shown for the fictional $LUMBER token.
const CONTRACT_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";
const X_PROFILE_URL: &str = "https://www.x.com/lumberCoin_";

#[function_component]
pub fn TokenBanner() -> Html {
    let copied = use_state(|| false);

    let copy_cb = {
        let copied = copied.clone();
        Callback::from(move |_e: MouseEvent| {
            if let Some(win) = web_sys::window() {
                // fire and forget; a failed copy only skips the toast
                let _ = win.navigator().clipboard().write_text(CONTRACT_ADDRESS);
                clog("contract address copied");
                copied.set(true);
                let copied_reset = copied.clone();
                let reset = Closure::once_into_js(move || copied_reset.set(false));
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.unchecked_ref(),
                    2000,
                );
            }
        })
    };

    html! {
        <div style="position:absolute; top:12px; right:12px; background:rgba(36,26,16,0.92); border:1px solid #5c4326; border-radius:8px; padding:8px 14px; display:flex; align-items:center; gap:10px; color:#f3e9d2; z-index:10;">
            <span style="color:#ffd60a; font-weight:600; font-size:13px;">{"$LUMBER"}</span>
            <span style="font-family:monospace; font-size:11px; opacity:0.8;">{ CONTRACT_ADDRESS }</span>
            <button onclick={copy_cb} style="padding:2px 8px; font-size:12px;">
                { if *copied { "Copied!" } else { "Copy CA" } }
            </button>
            <a href={X_PROFILE_URL} target="_blank" style="color:#58a6ff; text-decoration:none; font-size:14px;">{"𝕏"}</a>
        </div>
    }
}
