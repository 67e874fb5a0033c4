pub mod health;
pub use self::health::health;

pub mod predict;
pub use self::predict::predict;
