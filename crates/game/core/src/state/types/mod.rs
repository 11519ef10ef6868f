pub mod common;
pub mod enemy;
pub mod entity;
pub mod experience;
pub mod player;

pub use common::HealthMeter;
pub use enemy::EnemyTemplate;
pub use entity::Entity;
pub use experience::Experience;
pub use player::Player;
