use super::game_view::GameView;
use crate::model::GameState;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::new);
    let last_totals = use_mut_ref(|| (0u32, 0u32));

    // Log score and tree milestones as they change
    {
        let last_totals = last_totals.clone();
        let deps = (game.score, game.trees_chopped);
        use_effect_with(deps, move |(score, trees)| {
            let mut prev = last_totals.borrow_mut();
            if prev.0 != *score {
                clog(&format!("score {} -> {}", prev.0, score));
            }
            if prev.1 != *trees {
                clog(&format!("trees {} -> {}", prev.1, trees));
            }
            *prev = (*score, *trees);
            || ()
        });
    }

    html! { <GameView game={game.clone()} /> }
}
