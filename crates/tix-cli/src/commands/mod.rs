pub mod boards;
pub mod cards;
pub mod dispatch;
pub mod export;
pub mod fetch;
