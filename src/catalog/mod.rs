use std::collections::HashMap;

use anyhow::bail;

use crate::models::{Product, User};

mod seed;

/// Read-only store of products and users
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across request handlers behind an `Arc` without any locking. Products keep
/// their load order: that order is the sampling universe for recommendation
/// selection and the definition of "trending".
pub struct CatalogStore {
    products: Vec<Product>,
    product_index: HashMap<u64, usize>,
    users: Vec<User>,
    user_index: HashMap<u64, usize>,
}

impl CatalogStore {
    /// Builds a store from product and user sets
    ///
    /// Both sets must be non-empty and carry unique ids; a violation is a
    /// startup-time data error, not a request-time condition.
    pub fn new(products: Vec<Product>, users: Vec<User>) -> anyhow::Result<Self> {
        if products.is_empty() {
            bail!("catalog requires at least one product");
        }
        if users.is_empty() {
            bail!("catalog requires at least one user");
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product_index.insert(product.id, position).is_some() {
                bail!("duplicate product id {} in seed data", product.id);
            }
        }

        let mut user_index = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            if user_index.insert(user.id, position).is_some() {
                bail!("duplicate user id {} in seed data", user.id);
            }
        }

        Ok(Self {
            products,
            product_index,
            users,
            user_index,
        })
    }

    /// Builds the store from the fixed Shop Mart seed set
    pub fn from_seed() -> anyhow::Result<Self> {
        Self::new(seed::products(), seed::users())
    }

    /// Looks up a product by id; absence is a normal `None`
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.product_index.get(&id).map(|&position| &self.products[position])
    }

    /// Looks up a user by id; absence is a normal `None`
    pub fn user(&self, id: u64) -> Option<&User> {
        self.user_index.get(&id).map(|&position| &self.users[position])
    }

    /// The full candidate pool, in stable load order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True when a product with this id exists
    pub fn product_exists(&self, id: u64) -> bool {
        self.product_index.contains_key(&id)
    }

    /// True when a user with this id exists
    pub fn user_exists(&self, id: u64) -> bool {
        self.user_index.contains_key(&id)
    }

    /// Id of the first loaded user, used as the fallback for unknown users
    pub fn default_user_id(&self) -> u64 {
        self.users[0].id
    }

    /// Number of products in the pool
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
