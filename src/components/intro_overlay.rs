use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub start: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(20,14,8,0.92); border:2px solid #5c4326; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 6px 18px rgba(0,0,0,0.6); font-size:15px; line-height:1.5; color:#f3e9d2; z-index:30;">
            <h2 style="margin:0 0 6px 0; font-size:30px; color:#ffd60a; text-align:center;">{"Timber Trails"}</h2>
            <div style="margin:0 auto 10px auto; width:fit-content; background:rgba(92,67,38,0.45); border:1px solid #5c4326; border-radius:10px; padding:6px 22px; font-size:34px; letter-spacing:8px;">{"🌲🪓🌲"}</div>
            <p style="margin:4px 0 14px 0; text-align:center; font-size:19px; opacity:0.9;">{"Ready to chop some trees?"}</p>
            <ul style="margin:0 0 14px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:5px;">
                <li>{"Press SPACEBAR to chop. Each press fills the progress bar."}</li>
                <li>{"Every felled tree is worth 10 points."}</li>
                <li>{"Keep a streak going for bigger and better popups."}</li>
                <li>{"$LUMBER coins drop while you chop."}</li>
                <li>{"Click a coin before it fades for +10."}</li>
                <li>{"You have 30 seconds. Make them count."}</li>
            </ul>
            <div style="display:flex; justify-content:center; margin-top:8px;">
                <button onclick={start_btn} style="font-size:18px; padding:10px 26px; background:#2e6b34; border:1px solid #1e4a22;">{"Start Chopping"}</button>
            </div>
        </div>
    }
}
