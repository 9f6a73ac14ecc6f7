//! The compiled-in corpus: four properties and six static pages.
//!
//! Content mirrors the published site. Prices are LKR per night.

use super::{FeatureCategory, Hotel, Room, RoomRates, StaticPage};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn feature_group(title: &str, items: &[&str]) -> FeatureCategory {
    FeatureCategory {
        title: title.to_string(),
        items: strings(items),
    }
}

#[allow(clippy::too_many_arguments)]
fn room(
    id: &str,
    name: &str,
    capacity: &str,
    rates: RoomRates,
    features: &[&str],
    image: &str,
    max_adults: u32,
    max_children: u32,
) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        capacity: capacity.to_string(),
        rates,
        features: strings(features),
        image: image.to_string(),
        max_adults,
        max_children,
        total_capacity: None,
        full_house: false,
    }
}

fn rates(room_only: u32, bed_breakfast: u32, half_board: u32, full_board: u32) -> RoomRates {
    RoomRates {
        room_only,
        bed_breakfast,
        half_board,
        full_board,
    }
}

pub(super) fn build_hotels() -> Vec<Hotel> {
    vec![amorea(), beach_house(), palms(), wild()]
}

fn amorea() -> Hotel {
    Hotel {
        id: "1".to_string(),
        name: "KayJay Amorea".to_string(),
        slug: "kayjay-amorea".to_string(),
        tagline: "Your Serene Coastal Retreat".to_string(),
        description: "Discover your tranquil escape at KayJay Amorea, a boutique beach hotel in Wattala, Sri Lanka. With breathtaking sea views, a sparkling outdoor pool, and direct beach access, it’s the perfect setting for romantic getaways or peaceful family holidays, just 30 minutes from Bandaranaike International Airport (CMB) and Colombo city.".to_string(),
        seo_title: "KayJay Amorea | Beachfront Hotel in Wattala, Sri Lanka".to_string(),
        seo_description: "Discover KayJay Amorea, one of the premier beach hotels in Uswetakeiyawa, Wattala. Our coastal hotel near Colombo Airport offers stunning sea views, a serene pool, and direct beach access.".to_string(),
        location: "100E Bopitiya Road, Uswetakeiyawa 11328, Wattala, Sri Lanka".to_string(),
        searchable_amenities: strings(&[
            "swimming pool", "beach access", "restaurant", "bar", "wifi", "parking",
            "weddings", "events", "air conditioning", "hot water", "sea view",
            "coastal hotel", "hotel in Uswetakeiyawa", "beach hotel",
        ]),
        images: strings(&[
            "/public/images/kayjay-amorea/hero.jpg",
            "/public/images/kayjay-amorea/pool.jpg",
            "/public/images/kayjay-amorea/room.jpg",
            "/public/images/kayjay-amorea/beach.jpg",
        ]),
        rooms: vec![
            room("101", "Standard Single", "1 Adult", rates(9_960, 10_180, 12_040, 13_780),
                &["Air Conditioning", "Hot Water", "Premium Amenities", "Mini Fridge"],
                "/public/images/kayjay-amorea/room-standard-single.jpg", 1, 0),
            room("102", "Standard Double", "2 Adults", rates(9_960, 14_400, 18_120, 21_600),
                &["Air Conditioning", "Hot Water", "Premium Amenities", "Television"],
                "/public/images/kayjay-amorea/room-standard-double.jpg", 2, 1),
            room("103", "Standard Triple", "3 Adults", rates(11_960, 18_620, 24_200, 29_420),
                &["Air Conditioning", "Attached Bathroom", "Spacious Layout"],
                "/public/images/kayjay-amorea/room-standard-triple.jpg", 3, 1),
            room("104", "Luxury Single", "1 Adult", rates(12_380, 14_600, 16_460, 18_140),
                &["Enhanced Amenities", "Superior View", "Plush Bedding"],
                "/public/images/kayjay-amorea/room-luxury-single.jpg", 1, 0),
            room("105", "Luxury Double", "2 Adults", rates(14_880, 19_320, 23_040, 26_400),
                &["Enhanced Amenities", "Prime Location", "Spacious Bathroom"],
                "/public/images/kayjay-amorea/room-luxury-double.jpg", 2, 1),
            room("106", "Luxury Triple", "3 Adults", rates(17_380, 24_040, 29_620, 34_660),
                &["Enhanced Amenities", "Extra Space", "Premium Comfort"],
                "/public/images/kayjay-amorea/room-luxury-triple.jpg", 3, 1),
        ],
        detailed_features: vec![
            feature_group("Rooms & Accommodation", &[
                "06 Standard Double Rooms | 02 Luxury Rooms",
                "Accommodates up to 16 Adults",
                "Inter-connecting & Air-conditioned Rooms",
                "In-Room: Air Conditioning, Hot Water, Attached Bathroom, Premium Amenities, Television, Mini Fridge",
            ]),
            feature_group("Dining & Entertainment", &[
                "À La Carte Menu",
                "Restaurant & Bar",
                "Indoor & Outdoor Dining Spaces",
                "BBQ Arrangements (on request)",
                "Space for Curated Parties & Events",
            ]),
            feature_group("Recreation & Relaxation", &[
                "Swimming Pool",
                "Direct Beach Access",
                "Yoga & Meditation",
            ]),
            feature_group("Events & Additional Benefits", &[
                "Hall Available for Weddings & Corporate Events",
                "Complimentary Wi-Fi",
                "Free Parking Space",
            ]),
        ],
        star_rating: Some(4),
        tripadvisor_url: Some("https://www.tripadvisor.com/Hotel_Review-g1188993-d12830850-Reviews-KayJay_Villa-Uswetakeiyawa_Western_Province.html?m=19905".to_string()),
        google_review_url: Some("https://g.page/r/CVxzOChopX1dEAE/review".to_string()),
        facebook_url: Some("https://web.facebook.com/kayjaybeachfront".to_string()),
        instagram_url: Some("https://www.instagram.com/kayjay_beachfront".to_string()),
    }
}

fn beach_house() -> Hotel {
    let mut full_house = room(
        "204", "Full House", "Up to 17 Guests", rates(128_000, 161_150, 195_270, 229_450),
        &["Exclusive Use of Entire Villa", "All Rooms Included", "Private Staff & Pool"],
        "/public/images/kay-jay-beach-house/full-house.jpg", 17, 8,
    );
    full_house.total_capacity = Some(17);
    full_house.full_house = true;

    Hotel {
        id: "2".to_string(),
        name: "Kay Jay Beach House".to_string(),
        slug: "kay-jay-beach-house".to_string(),
        tagline: "Pasikuda’s Pristine Beachfront Paradise".to_string(),
        description: "Set directly on the pristine shores of Kalkudah Bay, the Kay Jay Beach House is your perfect East Coast escape. With direct beach access, clear shallow waters ideal for swimming & snorkeling, and an inviting outdoor pool, it’s a secluded haven for romantic escapes, family holidays, and beach lovers.".to_string(),
        seo_title: "Kay Jay Beach House | Pasikuda Beachfront Villa".to_string(),
        seo_description: "Escape to Kay Jay Beach House, a premier beachfront resort in Pasikuda, located on Kalkudah's pristine bay. As one of the top hotels in the Eastern Province of Sri Lanka, our villa offers a private pool and stunning sunrise views.".to_string(),
        location: "WH99+MR3, Old Pasikuda Road, Kalkudah 30410".to_string(),
        searchable_amenities: strings(&[
            "swimming pool", "beach access", "sunrise view", "biking", "cycling",
            "snorkeling", "diving", "fishing", "atv riding", "wifi", "parking",
            "air conditioning", "hot water", "sea view", "resort in pasikuda",
            "hotel in kalkudah", "eastern province hotel", "beachfront resort",
        ]),
        images: strings(&[
            "/public/images/kay-jay-beach-house/hero.jpg",
            "/public/images/kay-jay-beach-house/view.jpg",
            "/public/images/kay-jay-beach-house/pool.jpg",
            "/public/images/kay-jay-beach-house/dining.jpg",
        ]),
        rooms: vec![
            full_house,
            room("201", "Double Room", "2 Adults", rates(15_000, 18_900, 22_900, 27_900),
                &["Sea View", "Private Balcony", "Comfortable Bedding"],
                "/public/images/kay-jay-beach-house/room-double.jpg", 2, 1),
            room("202", "Triple Room", "3 Adults", rates(20_000, 23_900, 27_900, 31_300),
                &["Extra Bed", "Spacious Layout", "Garden View"],
                "/public/images/kay-jay-beach-house/room-triple.jpg", 3, 1),
            room("203", "Suite", "2 Adults, 2 Children", rates(18_000, 23_850, 29_850, 34_950),
                &["Separate Living Area", "Premium Amenities", "Panoramic Views"],
                "/public/images/kay-jay-beach-house/room-suite.jpg", 2, 2),
        ],
        detailed_features: vec![
            feature_group("Rooms & Accommodation", &[
                "6 Double Rooms | 1 Triple Room | 1 Suite",
                "Accommodates up to 17 Adults",
                "Inter-connecting & Air-conditioned Rooms",
                "In-Room: Air Conditioning, Hot Water, Attached Bathroom, Premium Amenities",
            ]),
            feature_group("Exclusive Facilities & Experiences", &[
                "Private Lobby Area with Wide Screen TV",
                "Swimming Pool",
                "Sunrise Viewpoint",
                "Dining & Drinks on the Beach",
                "À La Carte Menu",
                "BBQ Arrangements (Additional charges apply)",
            ]),
            feature_group("Activities & Recreation", &[
                "Biking & Cycling",
                "Snorkeling, Diving & Fishing",
                "ATV Riding",
                "Board Games",
                "Water Sports at Pasikudah Beach",
            ]),
            feature_group("Additional Benefits", &[
                "Complimentary Wi-Fi",
                "Free Parking Space",
            ]),
        ],
        star_rating: Some(4),
        tripadvisor_url: Some("https://www.tripadvisor.com/Hotel_Review-g2193270-d8335636-Reviews-KayJay_Beach_House-Kalkudah_Eastern_Province.html?m=19905".to_string()),
        google_review_url: Some("https://g.page/r/CV3mw5nwUXUiEAE/review".to_string()),
        facebook_url: Some("https://web.facebook.com/KayJayBeachHouse/".to_string()),
        instagram_url: Some("https://www.instagram.com/kayjaybeachhouse".to_string()),
    }
}

fn palms() -> Hotel {
    let mut full_house = room(
        "305", "Full House", "Up to 31 Guests", rates(136_400, 198_400, 260_400, 322_400),
        &["Entire Property", "Private Pool & Gardens", "Full Exclusivity"],
        "/public/images/kay-jay-palms/full-house.jpg", 31, 10,
    );
    full_house.total_capacity = Some(31);
    full_house.full_house = true;

    let mut dorm = room(
        "304", "Dorm (6 Person)", "Up to 6 Guests", rates(20_000, 32_000, 44_000, 56_000),
        &["Bunk Beds", "Shared Facilities", "Ideal for Groups"],
        "/public/images/kay-jay-palms/room-dorm.jpg", 6, 6,
    );
    dorm.total_capacity = Some(6);

    Hotel {
        id: "3".to_string(),
        name: "Kay Jay Palms".to_string(),
        slug: "kay-jay-palms".to_string(),
        tagline: "Your Tranquil Colonial Escape".to_string(),
        description: "Nestled in a 75-acre palm estate along Kalkudah Road, Pethalei, Kay Jay Palms offers a peaceful colonial-style retreat surrounded by lush greenery. With spacious rooms, a plantation-view pool, and authentic Sri Lankan hospitality, it’s the perfect base for relaxation, exploration, or nature photography.".to_string(),
        seo_title: "Kay Jay Palms | Colonial Style Hotel in Pasikuda".to_string(),
        seo_description: "Relax at Kay Jay Palms, a colonial-style hotel in Pasikuda, one of the finest resorts in the Eastern Province of Sri Lanka. Set on a 75-acre palm estate near Kalkudah, we offer a serene pool and authentic hospitality.".to_string(),
        location: "Kay Jay Palms, B185, Kalkudah".to_string(),
        searchable_amenities: strings(&[
            "swimming pool", "plantation", "bird watching", "nature photography",
            "cycling", "bbq", "wifi", "parking", "air conditioning", "hot water",
            "dormitory", "colonial", "resort in pasikuda", "hotel in kalkudah",
            "eastern province hotel",
        ]),
        images: strings(&[
            "/public/images/kay-jay-palms/hero.jpg",
            "/public/images/kay-jay-palms/pool.jpg",
            "/public/images/kay-jay-palms/garden.jpg",
            "/public/images/kay-jay-palms/room.jpg",
        ]),
        rooms: vec![
            full_house,
            room("301", "Double & Twin Room", "2 Adults", rates(9_900, 13_900, 17_900, 21_900),
                &["Plantation View", "Air Conditioning", "Modern Bathroom"],
                "/public/images/kay-jay-palms/room-double.jpg", 2, 1),
            room("302", "Single Room", "1 Adult", rates(7_200, 9_200, 11_200, 13_200),
                &["Cozy & Comfortable", "Garden View", "Essential Amenities"],
                "/public/images/kay-jay-palms/room-single.jpg", 1, 0),
            room("303", "Triple Room", "3 Adults", rates(14_900, 20_900, 26_900, 32_900),
                &["Spacious for Three", "Pool View", "Extra Bedding"],
                "/public/images/kay-jay-palms/room-triple.jpg", 3, 1),
            dorm,
        ],
        detailed_features: vec![
            feature_group("Room & Property Configuration", &[
                "Double, Twin, Single & Triple Rooms",
                "6-Person Dormitory",
                "Full House Option (Up to 31 Adults)",
                "Set in a 75-acre Palm Estate",
            ]),
            feature_group("Facilities & Services", &[
                "Plantation-view Swimming Pool",
                "Lush Green Gardens",
                "Authentic Sri Lankan Cuisine",
                "BBQ Facilities",
                "Free Wi-Fi",
                "Free Parking",
            ]),
            feature_group("Activities & Experiences", &[
                "Plantation Walks",
                "Bird Watching",
                "Nature Photography",
                "Relaxing Colonial Atmosphere",
                "Cycling",
            ]),
            feature_group("Comfort & Convenience", &[
                "Air-Conditioned Rooms",
                "Hot Water",
                "Modern Bathrooms",
                "Comfortable Luxury Rooms",
            ]),
        ],
        star_rating: Some(4),
        tripadvisor_url: Some("https://www.tripadvisor.com/Hotel_Review-g2193270-d23331139-Reviews-Kayjay_Palms-Kalkudah_Eastern_Province.html?m=19905".to_string()),
        google_review_url: Some("https://g.page/r/CX9iQxFEmfgLEAE/review".to_string()),
        facebook_url: Some("https://web.facebook.com/kayjaypalms/".to_string()),
        instagram_url: Some("https://www.instagram.com/kayjay_palms".to_string()),
    }
}

fn wild() -> Hotel {
    let mut full_house = room(
        "405", "Full House", "Up to 30 Guests", rates(134_300, 188_100, 257_300, 330_500),
        &["Exclusive Use of Entire Lodge", "All Chalets & Dorm Included", "Private Staff & Bonfire"],
        "/public/images/kay-jay-wild/lodge.jpg", 30, 15,
    );
    full_house.total_capacity = Some(30);
    full_house.full_house = true;

    let mut dorm = room(
        "403", "Dorm (20 Person)", "Up to 20 Guests", rates(50_000, 63_000, 80_000, 99_000),
        &["Bunk Beds", "Shared Facilities", "Perfect for Large Groups"],
        "/public/images/kay-jay-wild/room-dorm.jpg", 20, 20,
    );
    dorm.total_capacity = Some(20);

    Hotel {
        id: "4".to_string(),
        name: "Kay Jay Wild".to_string(),
        slug: "kay-jay-wild".to_string(),
        tagline: "Your Immersive Safari Gateway".to_string(),
        description: "Bordering Wilpattu National Park in Eluwankulama, Kay Jay Wild is an eco-friendly lodge offering an authentic “back to nature” experience. Perfect for safari enthusiasts, our rustic chalets and immersive environment provide a front-row seat to Sri Lanka’s incredible wildlife, just moments from the park entrance.".to_string(),
        seo_title: "Kay Jay Wild | Wilpattu National Park Safari Lodge".to_string(),
        seo_description: "Experience an authentic safari at Kay Jay Wild, one of the leading safari lodges near Wilpattu National Park. Our eco-friendly Wilpattu hotel offers rustic chalets and guided jeep tours for your ultimate wildlife adventure.".to_string(),
        location: "Old Eluwankulama Eluwankulama, wilpattu, Eluwankulama 61308".to_string(),
        searchable_amenities: strings(&[
            "safari", "national park", "wildlife", "eco-friendly", "bonfire",
            "jeep tours", "bird watching", "nature", "chalets", "bbq",
            "wilpattu hotel", "safari lodge",
        ]),
        images: strings(&[
            "/public/images/kay-jay-wild/hero.jpg",
            "/public/images/kay-jay-wild/chalet.jpg",
            "/public/images/kay-jay-wild/jeep.jpg",
            "/public/images/kay-jay-wild/lodge.jpg",
        ]),
        rooms: vec![
            full_house,
            dorm,
            room("401", "Double Room", "2 Adults", rates(11_300, 14_600, 18_900, 23_400),
                &["Jungle View", "Air Conditioning", "Private Veranda"],
                "/public/images/kay-jay-wild/room-chalet.jpg", 2, 1),
            room("402", "Standard Double Room", "2 Adults", rates(7_500, 11_500, 15_500, 19_500),
                &["Air Conditioning", "Attached Bathroom", "Comfortable & Cozy"],
                "/public/images/kay-jay-wild/chalet.jpg", 2, 1),
            room("404", "Single Room", "1 Adult", rates(4_500, 6_300, 8_000, 9_900),
                &["Jungle View", "Air Conditioning", "Ideal for Solo Travelers"],
                "/public/images/kay-jay-wild/room-single.jpg", 1, 0),
        ],
        detailed_features: vec![
            feature_group("Accommodation & Chalets", &[
                "Standard & Family Chalets",
                "20-Person Dormitory",
                "Air-Conditioned Rooms",
                "Private Verandas with Jungle Views",
            ]),
            feature_group("Safari & Experiences", &[
                "Wilpattu National Park Jeep Safaris",
                "Guided Nature Walks",
                "Bird Watching Tours",
                "Bonfire & BBQ Nights",
            ]),
            feature_group("Lodge Facilities", &[
                "Open-air Restaurant",
                "Eco-friendly Design",
                "Free Wi-Fi in Common Areas",
                "Free Parking",
            ]),
        ],
        star_rating: Some(4),
        tripadvisor_url: Some("https://www.tripadvisor.com/Hotel_Review-g12549273-d20304514-Reviews-Kay_Jay_Wild_Wilpattu-Eluwankulam_North_Western_Province.html?m=19905".to_string()),
        google_review_url: Some("https://g.page/r/CTubzrmk_VcIEAE/review".to_string()),
        facebook_url: Some("https://web.facebook.com/kayjaywild".to_string()),
        instagram_url: Some("https://www.instagram.com/kayjaywildwilpattu".to_string()),
    }
}

pub(super) fn build_static_pages() -> Vec<StaticPage> {
    let page = |name: &str, path: &str, content: &str| StaticPage {
        name: name.to_string(),
        path: path.to_string(),
        content: content.to_string(),
    };

    vec![
        page("About Us", "/about", "Our Story Effortless Elegance Since 2006. Discover Boutique Luxury, Natural Beauty & Authentic Sri Lankan Hospitality. Kay Jay Hotels Pvt Ltd is a premier hospitality brand in Sri Lanka, dedicated to delivering boutique luxury, personalized service, and authentic island experiences."),
        page("Contact Us", "/contact", "Get In Touch. Corporate Office Kay Jay Hotels (Pvt) Ltd. 100E Bopitiya Road, Uswetakeiyawa 11328, Wattala, Sri Lanka. Email: info@kayjayhotels.com Phone / WhatsApp +94 74 20 21 700 +94 74 20 21 777"),
        page("Sustainability", "/sustainability", "Our Commitment to Sustainability. Preserving Paradise for Generations to Come. Responsible Tourism, Authentic Experiences. Environmental Stewardship, Community & Culture."),
        page("FAQ", "/faq", "Frequently Asked Questions. How do I make a booking? What are the check-in and check-out times? What is your cancellation policy? Do you offer airport transfers? Are your hotels family-friendly? Can I book for a large group or host an event?"),
        page("Privacy Policy", "/privacy-policy", "Privacy Policy. We are committed to protecting your privacy and handling your personal data. Information We Collect, How We Use Your Information."),
        page("Terms & Conditions", "/terms-and-conditions", "Terms & Conditions. Bookings and Reservations. Pricing and Payment. Cancellation Policy. Check-in and Check-out."),
    ]
}
