use yew::prelude::*;

/// Flavor line for the end screen, keyed on trees felled.
fn rank_message(trees: u32) -> &'static str {
    if trees >= 10 {
        "Incredible! You're a legendary lumberjack with arms of steel!"
    } else if trees >= 5 {
        "Good job! You're becoming a skilled lumberjack."
    } else {
        "Keep practicing! Your arms will get stronger."
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub trees: u32,
    pub best_streak: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.65); z-index:40;">
            <div style="background:rgba(20,14,8,0.95); border:2px solid #e5484d; padding:24px 32px; border-radius:12px; text-align:center; min-width:340px; color:#f3e9d2;">
                <h2 style="margin:0 0 12px 0; color:#e5484d; font-size:28px;">{"Time's Up!"}</h2>
                <p style="margin:4px 0; font-size:22px; color:#ffd60a;">{ format!("{} points", props.score) }</p>
                <p style="margin:4px 0;">{ format!("Trees chopped: {}", props.trees) }</p>
                <p style="margin:4px 0;">{ format!("Best streak: {}", props.best_streak) }</p>
                <p style="margin:12px 0 4px 0; opacity:0.85; font-size:14px;">{ rank_message(props.trees) }</p>
                <div style="margin-top:16px; display:flex; justify-content:center;">
                    <button onclick={restart_btn} style="font-size:17px; padding:9px 24px; background:#2e6b34; border:1px solid #1e4a22;">{"Play Again"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::rank_message;

    #[test]
    fn rank_message_scales_with_trees() {
        assert!(rank_message(0).starts_with("Keep practicing"));
        assert!(rank_message(4).starts_with("Keep practicing"));
        assert!(rank_message(5).starts_with("Good job"));
        assert!(rank_message(9).starts_with("Good job"));
        assert!(rank_message(10).starts_with("Incredible"));
    }
}
