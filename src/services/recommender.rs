use rand::Rng;

use crate::catalog::CatalogStore;
use crate::error::{AppError, AppResult};
use crate::models::{RecommendationBundle, Strategy};

use super::Selector;

/// Items in each section of a user bundle
const USER_SECTION_COUNT: usize = 8;
/// Items drawn for a product's "also bought" section, before self-exclusion
const ALSO_BOUGHT_COUNT: usize = 4;

/// Assembles recommendation bundles for the two boundary entry points
///
/// Stateless: each call is a single pass over the catalog with no caching
/// and no intermediate state.
pub struct Recommender<'a> {
    catalog: &'a CatalogStore,
}

impl<'a> Recommender<'a> {
    /// Creates a recommender over the given catalog
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self { catalog }
    }

    /// The per-user bundle: `for_you` and `trending`, eight items each
    ///
    /// Unlike the selector, this entry point enforces that the user exists.
    /// It is the primary personalization surface, and callers expect a 404
    /// for an unknown user rather than silently degraded output.
    pub fn for_user<R: Rng + ?Sized>(
        &self,
        user_id: u64,
        rng: &mut R,
    ) -> AppResult<RecommendationBundle> {
        if !self.catalog.user_exists(user_id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let selector = Selector::new(self.catalog);
        let mut bundle = RecommendationBundle::new();
        bundle.insert(
            Strategy::ForYou,
            selector.select(Strategy::ForYou, user_id, USER_SECTION_COUNT, rng),
        );
        bundle.insert(
            Strategy::Trending,
            selector.select(Strategy::Trending, user_id, USER_SECTION_COUNT, rng),
        );
        Ok(bundle)
    }

    /// The per-product bundle: a single `also_bought` section
    ///
    /// The queried product is removed from the draw without refilling, so
    /// the section may hold fewer than four items. A missing `user_id`
    /// means the catalog's default user; an unknown one falls back inside
    /// the selector.
    pub fn for_product<R: Rng + ?Sized>(
        &self,
        product_id: u64,
        user_id: Option<u64>,
        rng: &mut R,
    ) -> AppResult<RecommendationBundle> {
        if !self.catalog.product_exists(product_id) {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        let user_id = user_id.unwrap_or_else(|| self.catalog.default_user_id());
        let selector = Selector::new(self.catalog);
        let mut picks = selector.select(Strategy::AlsoBought, user_id, ALSO_BOUGHT_COUNT, rng);
        picks.retain(|product| product.id != product_id);

        let mut bundle = RecommendationBundle::new();
        bundle.insert(Strategy::AlsoBought, picks);
        Ok(bundle)
    }
}
