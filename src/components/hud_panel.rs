use yew::prelude::*;

use crate::model::RUN_SECS;
use crate::util::format_secs;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub score: u32,
    pub trees: u32,
    pub streak: u32,
    pub best: u32,
    /// Pinned at the full run length until the walk-in lands.
    pub time_left: u32,
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let timer_color = if props.time_left <= 5 {
        "#f85149"
    } else {
        "#f3e9d2"
    };
    let time_pct = props.time_left as f64 / RUN_SECS as f64 * 100.0;
    let badge_style =
        "background:rgba(92,67,38,0.6); border:1px solid #5c4326; border-radius:6px; padding:2px 10px;";
    html! {
        <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(36,26,16,0.92); border:1px solid #5c4326; border-radius:8px; padding:10px 18px; min-width:560px; display:flex; flex-direction:column; gap:8px; font-size:16px; color:#f3e9d2; z-index:10;">
            <div style="display:flex; align-items:center; justify-content:space-between; gap:16px;">
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style="font-size:20px;">{"🪓"}</span>
                    <span style="font-weight:600; font-variant-numeric:tabular-nums;">{ format!("{} points", props.score) }</span>
                    <span style={badge_style}>{ format!("🌲 +{}", props.trees) }</span>
                </div>
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style={badge_style}>{ format!("Streak: {}", props.streak) }</span>
                    <span style={badge_style}>{ format!("Best: {}", props.best) }</span>
                </div>
                <div style={format!("font-weight:600; font-variant-numeric:tabular-nums; color:{};", timer_color)}>
                    { format!("⏱ {}", format_secs(props.time_left)) }
                </div>
            </div>
            <div style="height:6px; background:rgba(15,15,15,0.6); border-radius:3px; overflow:hidden;">
                <div style={format!("height:100%; width:{:.0}%; background:#e5484d;", time_pct)}></div>
            </div>
        </div>
    }
}
