//! Mock place dataset rendered as pins on the map surface.

use crate::models::{Place, Point, TimingDay};

fn week(weekday: &str, weekend: &str, today: usize) -> Vec<TimingDay> {
    const DAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    DAYS.iter()
        .enumerate()
        .map(|(idx, day)| TimingDay {
            day: (*day).to_string(),
            hours: if idx < 5 { weekday } else { weekend }.to_string(),
            is_today: idx == today,
        })
        .collect()
}

fn photos(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("https://images.unsplash.com/photo-{id}?w=400&h=300&fit=crop"))
        .collect()
}

/// The built-in places, in pin order.
pub fn default_places() -> Vec<Place> {
    vec![
        Place {
            id: "blue-bottle-coffee".into(),
            name: "Blue Bottle Coffee".into(),
            category: "Coffee shop".into(),
            rating: 4.4,
            total_reviews: 1247,
            price_level: "$$".into(),
            address: "66 Mint St, San Francisco, CA 94103".into(),
            neighborhood: "SoMa".into(),
            phone: "(510) 653-3394".into(),
            website: "bluebottlecoffee.com".into(),
            is_open: true,
            opening_time: "Closes 6 PM".into(),
            timings: week("7 AM–6 PM", "8 AM–7 PM", 1),
            photos: photos(&[
                "1501339847302-ac426a4a7cbb",
                "1495474472287-4d71bcdd2085",
                "1442512595331-e89e73853f31",
                "1509042239860-f550ce710b93",
                "1511920170033-f8396924c348",
            ]),
            description: Some(
                "Specialty coffee roaster with a minimalist aesthetic serving espresso drinks & pastries."
                    .into(),
            ),
            position: Point::new(60.0, 20.0),
        },
        Place {
            id: "tartine-bakery".into(),
            name: "Tartine Bakery".into(),
            category: "Bakery".into(),
            rating: 4.5,
            total_reviews: 8421,
            price_level: "$$".into(),
            address: "600 Guerrero St, San Francisco, CA 94110".into(),
            neighborhood: "Mission District".into(),
            phone: "(415) 487-2600".into(),
            website: "tartinebakery.com".into(),
            is_open: true,
            opening_time: "Closes 5 PM".into(),
            timings: week("8 AM–5 PM", "8 AM–5 PM", 1),
            photos: photos(&["1509440159596-0249088772ff", "1555507036-ab1f4038808a"]),
            description: Some("Beloved neighborhood bakery known for country bread and morning buns.".into()),
            position: Point::new(35.0, 55.0),
        },
        Place {
            id: "ferry-building".into(),
            name: "Ferry Building Marketplace".into(),
            category: "Market".into(),
            rating: 4.7,
            total_reviews: 23190,
            price_level: "$$".into(),
            address: "1 Ferry Building, San Francisco, CA 94111".into(),
            neighborhood: "Embarcadero".into(),
            phone: "(415) 983-8000".into(),
            website: "ferrybuildingmarketplace.com".into(),
            is_open: true,
            opening_time: "Closes 7 PM".into(),
            timings: week("7 AM–7 PM", "8 AM–6 PM", 1),
            photos: photos(&["1449034446853-66c86144b0ad"]),
            description: None,
            position: Point::new(82.0, 12.0),
        },
        Place {
            id: "dolores-park".into(),
            name: "Mission Dolores Park".into(),
            category: "Park".into(),
            rating: 4.8,
            total_reviews: 15402,
            price_level: "".into(),
            address: "Dolores St & 19th St, San Francisco, CA 94114".into(),
            neighborhood: "Mission Dolores".into(),
            phone: "(415) 831-2700".into(),
            website: "sfrecpark.org".into(),
            is_open: true,
            opening_time: "Closes 10 PM".into(),
            timings: week("6 AM–10 PM", "6 AM–10 PM", 1),
            photos: photos(&["1501594907352-04cda38ebc29"]),
            description: Some("Hillside park with city views, tennis courts and a playground.".into()),
            position: Point::new(22.0, 80.0),
        },
        Place {
            id: "city-lights".into(),
            name: "City Lights Booksellers".into(),
            category: "Book store".into(),
            rating: 4.7,
            total_reviews: 3120,
            price_level: "$".into(),
            address: "261 Columbus Ave, San Francisco, CA 94133".into(),
            neighborhood: "North Beach".into(),
            phone: "(415) 362-8193".into(),
            website: "citylights.com".into(),
            is_open: false,
            opening_time: "Opens 10 AM".into(),
            timings: week("10 AM–8 PM", "10 AM–9 PM", 1),
            photos: photos(&["1526243741027-444d633d7365"]),
            description: None,
            position: Point::new(55.0, 8.0),
        },
    ]
}
