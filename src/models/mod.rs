pub mod product;
pub mod recommendation;
pub mod user;

pub use product::Product;
pub use recommendation::{RecommendationBundle, Strategy};
pub use user::User;
