use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Product;

/// A named selection policy for picking products out of the catalog pool
///
/// The serialized labels are the wire keys of a [`RecommendationBundle`].
/// Variant order is the order sections appear in a serialized bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform random draw, simulating personalized picks
    ForYou,
    /// First products in pool order, simulating popular items
    Trending,
    /// Uniform random draw, simulating collaborative filtering
    AlsoBought,
}

impl Strategy {
    /// The wire label for this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ForYou => "for_you",
            Strategy::Trending => "trending",
            Strategy::AlsoBought => "also_bought",
        }
    }
}

/// The recommendation sections returned for one request
///
/// Maps each strategy label to an ordered product sequence. Built fresh per
/// request and fully owned by the caller; no sequence ever repeats a product
/// id, and no sequence is longer than the catalog pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBundle(BTreeMap<Strategy, Vec<Product>>);

impl RecommendationBundle {
    /// Creates an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the product sequence for a strategy, replacing any previous one
    pub fn insert(&mut self, strategy: Strategy, products: Vec<Product>) {
        self.0.insert(strategy, products);
    }

    /// The sequence selected for a strategy, if present
    pub fn section(&self, strategy: Strategy) -> Option<&[Product]> {
        self.0.get(&strategy).map(Vec::as_slice)
    }

    /// Strategies present in this bundle
    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.0.keys().copied()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no section has been added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Strategy::ForYou.as_str(), "for_you");
        assert_eq!(Strategy::Trending.as_str(), "trending");
        assert_eq!(Strategy::AlsoBought.as_str(), "also_bought");
    }

    #[test]
    fn test_strategy_serialization_matches_labels() {
        for strategy in [Strategy::ForYou, Strategy::Trending, Strategy::AlsoBought] {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
    }

    #[test]
    fn test_bundle_serializes_as_object_keyed_by_label() {
        let mut bundle = RecommendationBundle::new();
        bundle.insert(Strategy::Trending, vec![]);
        bundle.insert(Strategy::ForYou, vec![]);

        let json = serde_json::to_value(&bundle).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("for_you"));
        assert!(object.contains_key("trending"));
    }

    #[test]
    fn test_insert_replaces_section() {
        let product = crate::models::Product::new(1, "Tee", "Tops", 24.99, "https://example.com/tee.png", "");
        let mut bundle = RecommendationBundle::new();
        bundle.insert(Strategy::Trending, vec![product.clone()]);
        bundle.insert(Strategy::Trending, vec![]);
        assert_eq!(bundle.len(), 1);
        assert!(bundle.section(Strategy::Trending).unwrap().is_empty());
    }
}
