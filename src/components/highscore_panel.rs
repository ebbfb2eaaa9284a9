use yew::prelude::*;

use crate::model::ScoreEntry;
use crate::util::short_wallet;

#[derive(Properties, PartialEq, Clone)]
pub struct HighscorePanelProps {
    pub entries: Vec<ScoreEntry>,
}

#[function_component]
pub fn HighscorePanel(props: &HighscorePanelProps) -> Html {
    let row_style =
        "display:flex; align-items:center; gap:8px; font-size:13px; animation:slide-in 0.3s ease;";
    html! {
        <div style="position:absolute; top:64px; right:12px; background:rgba(36,26,16,0.92); border:1px solid #5c4326; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:8px; color:#f3e9d2; z-index:10;">
            <div style="font-size:15px; font-weight:600; color:#ffd60a;">{"🏆 Highscores"}</div>
            {
                if props.entries.is_empty() {
                    html! { <div style="opacity:0.7; font-size:13px;">{"No scores yet!"}</div> }
                } else {
                    props.entries.iter().enumerate().map(|(i, e)| {
                        html! {
                            <div key={e.wallet.clone()} style={row_style}>
                                <span style="width:18px; flex-shrink:0; color:#ffd60a;">{ format!("{}.", i + 1) }</span>
                                <span style="flex:1; font-family:monospace; opacity:0.85;">{ short_wallet(&e.wallet) }</span>
                                <span style="color:#a3e635; font-size:12px;">{ format!("🌲 +{}", e.trees) }</span>
                                <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ e.score }</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            }
        </div>
    }
}
