//! Catalog seeding
//!
//! Populates the starter catalog on first boot so a fresh install has
//! something to sell. Skipped entirely when any product already exists.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Dimensions, ProductCreate};
use crate::db::repository::{PRODUCT_TABLE, ProductRepository, RepoResult};

/// Insert the starter catalog if the products collection is empty.
///
/// Returns the number of products inserted (0 when seeding was skipped).
pub async fn seed_if_empty(db: &Surreal<Db>) -> RepoResult<usize> {
    let repo = ProductRepository::new(db.clone());

    let existing = repo.count().await?;
    if existing > 0 {
        tracing::debug!(count = existing, "Catalog already populated, skipping seed");
        return Ok(0);
    }

    let products = sample_products();
    let total = products.len();
    for product in products {
        repo.create(product).await?;
    }

    tracing::info!(count = total, table = PRODUCT_TABLE, "Seeded starter catalog");
    Ok(total)
}

fn sample_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "AcousticPro Headphones".to_string(),
            description: "Over-ear wireless headphones with active noise cancellation and a 30-hour battery.".to_string(),
            image_url: Some("https://picsum.photos/seed/headphones/600/400".to_string()),
            price: 199.99,
            category: "Electronics".to_string(),
            stock: 150,
            weight: Some(0.35),
            dimensions: Some(Dimensions {
                length: Some(20.0),
                breadth: Some(18.0),
                height: Some(8.0),
            }),
        },
        ProductCreate {
            name: "ErgoFlow Office Chair".to_string(),
            description: "Ergonomic mesh office chair with adjustable lumbar support and headrest.".to_string(),
            image_url: Some("https://picsum.photos/seed/chair/600/400".to_string()),
            price: 349.99,
            category: "Furniture".to_string(),
            stock: 75,
            weight: Some(14.5),
            dimensions: Some(Dimensions {
                length: Some(70.0),
                breadth: Some(70.0),
                height: Some(120.0),
            }),
        },
        ProductCreate {
            name: "Gourmet Coffee Blend".to_string(),
            description: "Medium-roast whole bean blend, 500g. Notes of chocolate and hazelnut.".to_string(),
            image_url: Some("https://picsum.photos/seed/coffee/600/400".to_string()),
            price: 24.99,
            category: "Groceries".to_string(),
            stock: 300,
            weight: Some(0.5),
            dimensions: None,
        },
        ProductCreate {
            name: "Classic Leather Wallet".to_string(),
            description: "Full-grain leather bifold wallet with RFID protection.".to_string(),
            image_url: Some("https://picsum.photos/seed/wallet/600/400".to_string()),
            price: 79.99,
            category: "Accessories".to_string(),
            stock: 200,
            weight: Some(0.1),
            dimensions: None,
        },
        ProductCreate {
            name: "YogaFlex Mat".to_string(),
            description: "Non-slip 6mm yoga mat with carrying strap.".to_string(),
            image_url: Some("https://picsum.photos/seed/yogamat/600/400".to_string()),
            price: 49.99,
            category: "Sports".to_string(),
            stock: 120,
            weight: Some(1.2),
            dimensions: Some(Dimensions {
                length: Some(183.0),
                breadth: Some(61.0),
                height: Some(0.6),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_valid() {
        let products = sample_products();
        assert_eq!(products.len(), 5);
        for p in &products {
            assert!(!p.name.trim().is_empty());
            assert!(p.price > 0.0);
            assert!(p.stock > 0);
        }
    }
}
