use rand::Rng;

use crate::catalog::CatalogStore;
use crate::models::{Product, Strategy};

/// Picks products out of the catalog pool according to a strategy
///
/// The selector never fails: an unknown user degrades to the catalog's
/// default user, and an over-large count is clamped to the pool size.
/// Callers supply the entropy source, so concurrent requests draw
/// independently and tests can seed the draw.
pub struct Selector<'a> {
    catalog: &'a CatalogStore,
}

impl<'a> Selector<'a> {
    /// Creates a selector over the given catalog
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self { catalog }
    }

    /// Selects up to `count` distinct products for a user under a strategy
    ///
    /// `Trending` is deterministic: the first `count` products in pool order.
    /// `ForYou` and `AlsoBought` draw uniformly without replacement, so a
    /// result never repeats a product id. The user currently carries no
    /// per-user signal; it is resolved (with fallback) so the request shape
    /// stays stable once a real model lands.
    pub fn select<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        user_id: u64,
        count: usize,
        rng: &mut R,
    ) -> Vec<Product> {
        let user_id = self.resolve_user(user_id);
        let pool = self.catalog.products();
        let count = count.min(pool.len());

        tracing::debug!(
            user_id,
            strategy = strategy.as_str(),
            count,
            "selecting recommendations"
        );

        match strategy {
            Strategy::Trending => pool[..count].to_vec(),
            Strategy::ForYou | Strategy::AlsoBought => {
                rand::seq::index::sample(rng, pool.len(), count)
                    .into_iter()
                    .map(|position| pool[position].clone())
                    .collect()
            }
        }
    }

    /// Substitutes the default user when the requested one is unknown
    fn resolve_user(&self, user_id: u64) -> u64 {
        if self.catalog.user_exists(user_id) {
            user_id
        } else {
            let fallback = self.catalog.default_user_id();
            tracing::debug!(user_id, fallback, "unknown user, using fallback");
            fallback
        }
    }
}
