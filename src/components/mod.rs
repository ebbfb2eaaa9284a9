pub mod app;
pub mod game_over_overlay;
pub mod game_view;
pub mod highscore_panel;
pub mod hud_panel;
pub mod intro_overlay;
pub mod settings_modal;
pub mod token_banner;
