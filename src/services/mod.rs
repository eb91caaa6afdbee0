pub mod recommender;
pub mod selector;

pub use recommender::Recommender;
pub use selector::Selector;
