//! Seed data for the in-memory store.
//!
//! Six pharmacy products and eight customer reviews. Reviews are seeded
//! newest-first, matching the order the store serves them in.

use chrono::{DateTime, TimeZone, Utc};
use rxcart_commerce::catalog::{Category, Product};
use rxcart_commerce::ids::{ProductId, ReviewId};
use rxcart_commerce::money::Money;
use rxcart_commerce::reviews::{Review, StoreResponse};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The seed product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Paracetamol".to_string(),
            category: Category::Otc,
            manufacturer: "Panadol".to_string(),
            price: Money::usd(1299),
            original_price: Some(Money::usd(1599)),
            discount: Some(19),
            rating: 4.5,
            review_count: 127,
            image_url: Some(
                "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "Extra strength acetaminophen for effective pain relief and fever \
                          reduction. Each caplet contains 500mg of acetaminophen."
                .to_string(),
            ingredients: strings(&[
                "Acetaminophen 500mg",
                "Microcrystalline cellulose",
                "Starch",
                "Stearic acid",
            ]),
            warnings: strings(&[
                "Do not exceed recommended dosage",
                "Consult doctor if symptoms persist",
                "Keep out of reach of children",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Vitamin D3 2000 IU".to_string(),
            category: Category::Vitamins,
            manufacturer: "Nature Made".to_string(),
            price: Money::usd(1899),
            original_price: None,
            discount: None,
            rating: 4.7,
            review_count: 89,
            image_url: Some(
                "https://images.unsplash.com/photo-1550572017-edd951aa8ca0?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "High-potency Vitamin D3 supplement to support bone health and immune \
                          function. 90 softgels per bottle."
                .to_string(),
            ingredients: strings(&[
                "Vitamin D3 (Cholecalciferol) 2000 IU",
                "Soybean oil",
                "Gelatin",
                "Glycerin",
            ]),
            warnings: strings(&[
                "Consult healthcare provider before use",
                "Do not exceed recommended dose",
                "Store in cool, dry place",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Moisturizing Face Cream SPF 30".to_string(),
            category: Category::Skincare,
            manufacturer: "CeraVe".to_string(),
            price: Money::usd(2499),
            original_price: Some(Money::usd(2999)),
            discount: Some(17),
            rating: 4.3,
            review_count: 156,
            image_url: Some(
                "https://images.unsplash.com/photo-1556229162-6b2e6c4e8b71?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "Daily moisturizing cream with broad-spectrum SPF 30 protection. \
                          Developed with dermatologists."
                .to_string(),
            ingredients: strings(&[
                "Zinc oxide",
                "Octinoxate",
                "Ceramides",
                "Hyaluronic acid",
                "Niacinamide",
            ]),
            warnings: strings(&[
                "For external use only",
                "Avoid contact with eyes",
                "Discontinue if irritation occurs",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("4"),
            name: "Ibuprofen 200mg".to_string(),
            category: Category::Otc,
            manufacturer: "Advil".to_string(),
            price: Money::usd(999),
            original_price: None,
            discount: None,
            rating: 4.4,
            review_count: 203,
            image_url: Some(
                "https://images.unsplash.com/photo-1471864190281-a93a3070b6de?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "Fast-acting ibuprofen for pain relief and inflammation reduction. 100 \
                          tablets per bottle."
                .to_string(),
            ingredients: strings(&[
                "Ibuprofen 200mg",
                "Corn starch",
                "Croscarmellose sodium",
                "Titanium dioxide",
            ]),
            warnings: strings(&[
                "Take with food or milk",
                "Do not exceed 6 tablets in 24 hours",
                "Consult doctor for extended use",
            ]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("5"),
            name: "Omega-3 Fish Oil".to_string(),
            category: Category::Vitamins,
            manufacturer: "Nordic Naturals".to_string(),
            price: Money::usd(3299),
            original_price: None,
            discount: None,
            rating: 4.6,
            review_count: 94,
            image_url: Some(
                "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "Premium omega-3 fish oil supplement with EPA and DHA for heart and \
                          brain health."
                .to_string(),
            ingredients: strings(&["Fish oil concentrate", "EPA 650mg", "DHA 450mg", "Vitamin E"]),
            warnings: strings(&[
                "Consult physician if pregnant",
                "Keep refrigerated after opening",
                "May cause fishy aftertaste",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("6"),
            name: "Baby Gentle Shampoo".to_string(),
            category: Category::BabyCare,
            manufacturer: "Johnson's Baby".to_string(),
            price: Money::usd(799),
            original_price: None,
            discount: None,
            rating: 4.8,
            review_count: 312,
            image_url: Some(
                "https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?w=400&h=400&fit=crop"
                    .to_string(),
            ),
            description: "Gentle, tear-free baby shampoo that cleanses delicate hair and scalp. \
                          Hypoallergenic formula."
                .to_string(),
            ingredients: strings(&[
                "Water",
                "Cocamidopropyl betaine",
                "PEG-80 sorbitan laurate",
                "Sodium trideceth sulfate",
            ]),
            warnings: strings(&[
                "For external use only",
                "Avoid contact with eyes",
                "Keep out of reach of children",
            ]),
            in_stock: true,
            featured: true,
        },
    ]
}

/// The seed reviews, newest-first.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId::new("r1"),
            product_id: ProductId::new("1"),
            product_name: "Acetaminophen Extra Strength".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "Excellent pain relief medication. Works quickly and effectively for \
                      headaches and muscle pain. The extra strength formula is perfect for my \
                      needs."
                .to_string(),
            date: at(2024, 1, 15, 10, 30),
            verified: true,
            store_response: Some(StoreResponse {
                body: "Thank you for your positive feedback, Sarah! We're glad our product \
                       provided the relief you needed."
                    .to_string(),
                date: at(2024, 1, 16, 9, 15),
            }),
        },
        Review {
            id: ReviewId::new("r2"),
            product_id: ProductId::new("2"),
            product_name: "Vitamin D3 2000 IU".to_string(),
            customer_name: "Michael Chen".to_string(),
            rating: 5,
            comment: "Great vitamin D supplement. I've been taking it for 3 months and my energy \
                      levels have improved significantly. Easy to swallow softgels."
                .to_string(),
            date: at(2024, 1, 10, 14, 22),
            verified: true,
            store_response: None,
        },
        Review {
            id: ReviewId::new("r3"),
            product_id: ProductId::new("3"),
            product_name: "Moisturizing Face Cream SPF 30".to_string(),
            customer_name: "Emily Rodriguez".to_string(),
            rating: 4,
            comment: "Good moisturizer with sun protection. Doesn't leave a greasy feeling and \
                      works well under makeup. Would recommend for daily use."
                .to_string(),
            date: at(2024, 1, 8, 16, 45),
            verified: true,
            store_response: None,
        },
        Review {
            id: ReviewId::new("r4"),
            product_id: ProductId::new("1"),
            product_name: "Acetaminophen Extra Strength".to_string(),
            customer_name: "David Williams".to_string(),
            rating: 4,
            comment: "Reliable pain reliever that I keep in my medicine cabinet. Works well for \
                      fever reduction too. Good value for the price."
                .to_string(),
            date: at(2024, 1, 5, 11, 30),
            verified: true,
            store_response: None,
        },
        Review {
            id: ReviewId::new("r5"),
            product_id: ProductId::new("5"),
            product_name: "Omega-3 Fish Oil".to_string(),
            customer_name: "Lisa Thompson".to_string(),
            rating: 5,
            comment: "High-quality fish oil supplement. No fishy aftertaste and I feel the \
                      difference in my joint health. Will definitely reorder."
                .to_string(),
            date: at(2024, 1, 3, 9, 15),
            verified: true,
            store_response: Some(StoreResponse {
                body: "We're thrilled to hear about your positive experience with our Omega-3 \
                       supplement, Lisa!"
                    .to_string(),
                date: at(2024, 1, 4, 10, 30),
            }),
        },
        Review {
            id: ReviewId::new("r6"),
            product_id: ProductId::new("6"),
            product_name: "Baby Gentle Shampoo".to_string(),
            customer_name: "Jennifer Brown".to_string(),
            rating: 5,
            comment: "Perfect for my baby's sensitive skin. Truly tear-free and leaves hair soft \
                      and clean. Been using for months with no issues."
                .to_string(),
            date: at(2024, 1, 1, 13, 20),
            verified: true,
            store_response: None,
        },
        Review {
            id: ReviewId::new("r7"),
            product_id: ProductId::new("2"),
            product_name: "Vitamin D3 2000 IU".to_string(),
            customer_name: "Robert Davis".to_string(),
            rating: 4,
            comment: "Good quality vitamin D. Doctor recommended this brand and I've been \
                      satisfied with the results. Easy to incorporate into daily routine."
                .to_string(),
            date: at(2023, 12, 28, 15, 45),
            verified: true,
            store_response: None,
        },
        Review {
            id: ReviewId::new("r8"),
            product_id: ProductId::new("4"),
            product_name: "Ibuprofen 200mg".to_string(),
            customer_name: "Amanda Wilson".to_string(),
            rating: 5,
            comment: "Fast-acting and effective for my arthritis pain. Much better than other \
                      brands I've tried. Great value for money."
                .to_string(),
            date: at(2023, 12, 25, 12, 10),
            verified: true,
            store_response: None,
        },
    ]
}
