pub mod sprite;

pub use sprite::{SpriteAnim, SpritePose};
