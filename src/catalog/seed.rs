//! Fixed seed data for the Shop Mart catalog

use crate::models::{Product, User};

/// The seed product set, in catalog order
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Classic Denim Jacket",
            "Outerwear",
            79.99,
            "https://placehold.co/400x600/3B82F6/FFFFFF?text=Denim+Jacket",
            "A timeless denim jacket made with premium, non-stretch denim. Perfect for layering over any outfit.",
        ),
        Product::new(
            2,
            "Organic Cotton Tee",
            "Tops",
            24.99,
            "https://placehold.co/400x600/10B981/FFFFFF?text=Cotton+Tee",
            "An ultra-soft t-shirt made from 100% organic cotton. A versatile wardrobe staple.",
        ),
        Product::new(
            3,
            "Slim-Fit Chinos",
            "Pants",
            59.99,
            "https://placehold.co/400x600/F59E0B/FFFFFF?text=Chinos",
            "Comfortable and stylish slim-fit chinos crafted with a bit of stretch for all-day wear.",
        ),
        Product::new(
            4,
            "Leather Ankle Boots",
            "Shoes",
            129.99,
            "https://placehold.co/400x600/6366F1/FFFFFF?text=Boots",
            "Sleek and durable ankle boots made from genuine leather, featuring a comfortable block heel.",
        ),
        Product::new(
            5,
            "Wool Scarf",
            "Accessories",
            39.99,
            "https://placehold.co/400x600/EF4444/FFFFFF?text=Scarf",
            "A cozy and warm scarf woven from 100% merino wool. Available in multiple colors.",
        ),
        Product::new(
            6,
            "Linen Button-Down",
            "Tops",
            65.00,
            "https://placehold.co/400x600/8B5CF6/FFFFFF?text=Linen+Shirt",
            "A breathable and lightweight shirt made from a premium linen blend, perfect for warm weather.",
        ),
        Product::new(
            7,
            "Athletic Joggers",
            "Pants",
            49.99,
            "https://placehold.co/400x600/4B5563/FFFFFF?text=Joggers",
            "Performance joggers with moisture-wicking fabric and a tapered fit for the gym or the street.",
        ),
        Product::new(
            8,
            "Minimalist Watch",
            "Accessories",
            199.99,
            "https://placehold.co/400x600/D97706/FFFFFF?text=Watch",
            "A sophisticated watch with a minimalist face and a genuine leather strap. Japanese quartz movement.",
        ),
    ]
}

/// The seed user set; the first entry is the fallback user
pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Alex Johnson", "alex@example.com"),
        User::new(2, "Maria Garcia", "maria@example.com"),
    ]
}
