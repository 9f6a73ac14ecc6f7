//! Static property catalog
//!
//! The four properties, their rooms and the searchable static pages.
//! The corpus is compiled in, built once behind a `OnceLock` and
//! immutable for the process lifetime.

mod data;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Price-tier thresholds against a room's room-only LKR price
const BUDGET_CEILING_LKR: u32 = 15_000;
const MID_RANGE_CEILING_LKR: u32 = 30_000;

/// A titled group of descriptive feature strings on a property
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCategory {
    pub title: String,
    pub items: Vec<String>,
}

/// Per-room base prices in LKR, one per meal plan
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoomRates {
    pub room_only: u32,
    pub bed_breakfast: u32,
    pub half_board: u32,
    pub full_board: u32,
}

/// The four fixed meal plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealPlan {
    Ro,
    Bb,
    Hb,
    Fb,
}

impl MealPlan {
    pub fn code(&self) -> &'static str {
        match self {
            MealPlan::Ro => "RO",
            MealPlan::Bb => "BB",
            MealPlan::Hb => "HB",
            MealPlan::Fb => "FB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealPlan::Ro => "Room Only",
            MealPlan::Bb => "Bed & Breakfast",
            MealPlan::Hb => "Half Board",
            MealPlan::Fb => "Full Board",
        }
    }
}

impl FromStr for MealPlan {
    type Err = AppError;

    /// Accepts the display codes (RO/BB/HB/FB) and the legacy data keys
    /// (ro/bb/hf/fb), case-insensitively. "hf" and "hb" both mean half board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ro" => Ok(MealPlan::Ro),
            "bb" => Ok(MealPlan::Bb),
            "hb" | "hf" => Ok(MealPlan::Hb),
            "fb" => Ok(MealPlan::Fb),
            other => Err(AppError::InvalidInput(format!(
                "Unknown meal plan '{}', expected one of RO, BB, HB, FB",
                other
            ))),
        }
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A bookable unit. A full-house room represents exclusive use of the
/// whole property; its capacity bound is `total_capacity` when present.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: String,
    pub rates: RoomRates,
    pub features: Vec<String>,
    pub image: String,
    pub max_adults: u32,
    pub max_children: u32,
    pub total_capacity: Option<u32>,
    pub full_house: bool,
}

impl Room {
    /// Base LKR price for the chosen meal plan
    pub fn base_price(&self, plan: MealPlan) -> u32 {
        match plan {
            MealPlan::Ro => self.rates.room_only,
            MealPlan::Bb => self.rates.bed_breakfast,
            MealPlan::Hb => self.rates.half_board,
            MealPlan::Fb => self.rates.full_board,
        }
    }

    /// Price-tier search label derived from the room-only price
    pub fn price_tier(&self) -> &'static str {
        price_tier(self.rates.room_only)
    }

    /// Upper guest bound for full-house and dormitory style rooms
    fn capacity_bound(&self) -> u32 {
        self.total_capacity
            .unwrap_or(self.max_adults + self.max_children)
    }

    /// Whether the room can host the party within its standard limits
    pub fn suits(&self, adults: u32, children: u32) -> bool {
        if self.full_house {
            adults + children <= self.capacity_bound()
        } else {
            adults <= self.max_adults && children <= self.max_children
        }
    }

    /// Whether an inquiry for this party must be treated as a custom
    /// inquiry (guest count beyond the standard capacity)
    pub fn is_custom_for(&self, adults: u32, children: u32) -> bool {
        match self.total_capacity {
            Some(total) => adults + children > total,
            None => adults > self.max_adults || children > self.max_children,
        }
    }
}

/// A hotel/resort in the corpus
#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub location: String,
    pub searchable_amenities: Vec<String>,
    pub images: Vec<String>,
    pub rooms: Vec<Room>,
    pub detailed_features: Vec<FeatureCategory>,
    pub star_rating: Option<u8>,
    pub tripadvisor_url: Option<String>,
    pub google_review_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

impl Hotel {
    pub fn room_by_id(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Cheapest room-only price across rooms, for "from" price displays
    pub fn price_from(&self) -> Option<u32> {
        self.rooms
            .iter()
            .filter(|r| !r.full_house)
            .map(|r| r.rates.room_only)
            .min()
    }
}

/// Non-hotel informational page, searchable by name and content
#[derive(Debug, Clone, Serialize)]
pub struct StaticPage {
    pub name: String,
    pub path: String,
    pub content: String,
}

/// Map a room-only LKR price onto its searchable tier label
pub fn price_tier(room_only_lkr: u32) -> &'static str {
    if room_only_lkr < BUDGET_CEILING_LKR {
        "budget affordable"
    } else if room_only_lkr < MID_RANGE_CEILING_LKR {
        "mid-range standard"
    } else {
        "luxury premium"
    }
}

/// The unit the search engine operates over
#[derive(Debug, Clone, Copy)]
pub enum SearchItem<'a> {
    Property(&'a Hotel),
    Room { room: &'a Room, hotel: &'a Hotel },
    Page(&'a StaticPage),
}

impl<'a> SearchItem<'a> {
    pub fn type_label(&self) -> &'static str {
        match self {
            SearchItem::Property(_) => "Property",
            SearchItem::Room { .. } => "Room",
            SearchItem::Page(_) => "Page",
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            SearchItem::Property(hotel) => &hotel.name,
            SearchItem::Room { room, .. } => &room.name,
            SearchItem::Page(page) => &page.name,
        }
    }

    /// Route the result card links to
    pub fn link_path(&self) -> String {
        match self {
            SearchItem::Property(hotel) => format!("/hotels/{}", hotel.slug),
            SearchItem::Room { hotel, .. } => format!("/hotels/{}#rooms", hotel.slug),
            SearchItem::Page(page) => page.path.clone(),
        }
    }

    /// Excerpt shown (and highlighted) on the result card
    pub fn description(&self) -> String {
        match self {
            SearchItem::Property(hotel) => hotel.description.clone(),
            SearchItem::Room { room, hotel } => {
                format!("At {} | {}", hotel.name, room.features.join(", "))
            }
            SearchItem::Page(page) => page.content.clone(),
        }
    }

    /// Amenity tags, present only for property items
    pub fn amenities(&self) -> Option<&'a [String]> {
        match self {
            SearchItem::Property(hotel) => Some(&hotel.searchable_amenities),
            _ => None,
        }
    }

    /// Lowercased blob of every searchable attribute of the item.
    /// Rooms inherit searchability from their parent property.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match self {
            SearchItem::Property(hotel) => {
                parts.push(hotel.name.clone());
                parts.push(hotel.tagline.clone());
                parts.push(hotel.description.clone());
                parts.push(hotel.location.clone());
                for room in &hotel.rooms {
                    parts.push(room.price_tier().to_string());
                }
                parts.extend(hotel.searchable_amenities.iter().cloned());
                for group in &hotel.detailed_features {
                    parts.push(group.title.clone());
                    parts.extend(group.items.iter().cloned());
                }
            }
            SearchItem::Room { room, hotel } => {
                parts.push(room.name.clone());
                parts.extend(room.features.iter().cloned());
                parts.push(room.price_tier().to_string());
                parts.push(hotel.name.clone());
                parts.push(hotel.location.clone());
                for group in &hotel.detailed_features {
                    parts.extend(group.items.iter().cloned());
                }
            }
            SearchItem::Page(page) => {
                parts.push(page.name.clone());
                parts.push(page.content.clone());
            }
        }
        parts.join(" ").to_lowercase()
    }
}

/// All properties, in corpus order
pub fn hotels() -> &'static [Hotel] {
    static HOTELS: OnceLock<Vec<Hotel>> = OnceLock::new();
    HOTELS.get_or_init(data::build_hotels)
}

pub fn hotel_by_slug(slug: &str) -> Option<&'static Hotel> {
    hotels().iter().find(|h| h.slug == slug)
}

/// The fixed informational pages
pub fn static_pages() -> &'static [StaticPage] {
    static PAGES: OnceLock<Vec<StaticPage>> = OnceLock::new();
    PAGES.get_or_init(data::build_static_pages)
}

/// Flatten the corpus into search items: each hotel, then its rooms,
/// hotels in declaration order, then the static pages. Scoring relies
/// on this order for stable tie-breaks.
pub fn search_items() -> Vec<SearchItem<'static>> {
    let mut items = Vec::new();
    for hotel in hotels() {
        items.push(SearchItem::Property(hotel));
        for room in &hotel.rooms {
            items.push(SearchItem::Room { room, hotel });
        }
    }
    for page in static_pages() {
        items.push(SearchItem::Page(page));
    }
    items
}

/// Display order of room feature categories
const FEATURE_CATEGORY_ORDER: &[&str] = &[
    "View & Location",
    "Layout & Space",
    "Bed & Bath",
    "Amenities & Comfort",
    "Group Features",
    "Highlights",
];

/// Category a room feature belongs to on the room card
fn feature_category(feature: &str) -> &'static str {
    match feature.to_lowercase().as_str() {
        "sea view" | "garden view" | "plantation view" | "jungle view" | "superior view"
        | "panoramic views" | "pool view" | "prime location" | "private balcony"
        | "private veranda" => "View & Location",
        "hot water" | "attached bathroom" | "spacious bathroom" | "modern bathroom"
        | "plush bedding" | "comfortable bedding" | "extra bed" | "extra bedding"
        | "bunk beds" => "Bed & Bath",
        "air conditioning" | "premium amenities" | "enhanced amenities"
        | "essential amenities" | "mini fridge" | "television" | "cozy & comfortable"
        | "comfortable & cozy" | "premium comfort" => "Amenities & Comfort",
        "spacious layout" | "extra space" | "separate living area" | "spacious for three" => {
            "Layout & Space"
        }
        "shared facilities" | "ideal for groups" | "perfect for large groups"
        | "ideal for solo travelers" => "Group Features",
        _ => "Highlights",
    }
}

/// Group a room's features by category, in the fixed display order
pub fn categorize_features(features: &[String]) -> Vec<(&'static str, Vec<&str>)> {
    let mut grouped: Vec<(&'static str, Vec<&str>)> = Vec::new();
    for feature in features {
        let category = feature_category(feature);
        match grouped.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(feature),
            None => grouped.push((category, vec![feature])),
        }
    }
    grouped.sort_by_key(|(c, _)| {
        FEATURE_CATEGORY_ORDER
            .iter()
            .position(|o| o == c)
            .unwrap_or(FEATURE_CATEGORY_ORDER.len())
    });
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_shape() {
        let hotels = hotels();
        assert_eq!(hotels.len(), 4);
        assert_eq!(static_pages().len(), 6);
        // Every hotel is reachable by slug
        for hotel in hotels {
            assert!(hotel_by_slug(&hotel.slug).is_some());
            assert!(!hotel.rooms.is_empty());
        }
        assert!(hotel_by_slug("no-such-hotel").is_none());
    }

    #[test]
    fn test_meal_plan_parsing() {
        assert_eq!("RO".parse::<MealPlan>().unwrap(), MealPlan::Ro);
        assert_eq!("bb".parse::<MealPlan>().unwrap(), MealPlan::Bb);
        // The legacy data key "hf" and the display code "HB" both parse
        assert_eq!("hf".parse::<MealPlan>().unwrap(), MealPlan::Hb);
        assert_eq!("HB".parse::<MealPlan>().unwrap(), MealPlan::Hb);
        assert_eq!("FB".parse::<MealPlan>().unwrap(), MealPlan::Fb);
        assert!("xx".parse::<MealPlan>().is_err());
    }

    #[test]
    fn test_price_tier_thresholds() {
        assert_eq!(price_tier(9_960), "budget affordable");
        assert_eq!(price_tier(14_999), "budget affordable");
        assert_eq!(price_tier(15_000), "mid-range standard");
        assert_eq!(price_tier(29_999), "mid-range standard");
        assert_eq!(price_tier(30_000), "luxury premium");
    }

    #[test]
    fn test_full_house_capacity_uses_total_capacity() {
        let hotel = hotel_by_slug("kay-jay-beach-house").unwrap();
        let full_house = hotel
            .rooms
            .iter()
            .find(|r| r.full_house)
            .expect("beach house has a full-house option");
        assert_eq!(full_house.total_capacity, Some(17));
        assert!(full_house.suits(10, 7));
        assert!(!full_house.suits(10, 8));
        // Custom threshold is the total capacity, not per-type limits
        assert!(!full_house.is_custom_for(17, 0));
        assert!(full_house.is_custom_for(17, 1));
    }

    #[test]
    fn test_standard_room_bounds_adults_and_children_separately() {
        let hotel = hotel_by_slug("kayjay-amorea").unwrap();
        let double = hotel.room_by_id("102").unwrap();
        assert!(double.suits(2, 1));
        assert!(!double.suits(3, 0), "adults above max_adults must not fit");
        assert!(!double.suits(1, 2), "children above max_children must not fit");
        assert!(double.is_custom_for(3, 0));
        assert!(double.is_custom_for(1, 2));
        assert!(!double.is_custom_for(2, 1));
    }

    #[test]
    fn test_dorm_custom_threshold_uses_total_capacity() {
        let hotel = hotel_by_slug("kay-jay-palms").unwrap();
        let dorm = hotel.room_by_id("304").unwrap();
        assert_eq!(dorm.total_capacity, Some(6));
        // 5 adults + 1 child exceeds neither limit nor total
        assert!(!dorm.is_custom_for(5, 1));
        // 4 + 3 is within per-type limits but over the total capacity
        assert!(dorm.is_custom_for(4, 3));
    }

    #[test]
    fn test_search_items_order() {
        let items = search_items();
        // 4 properties + their rooms + 6 pages
        let room_count: usize = hotels().iter().map(|h| h.rooms.len()).sum();
        assert_eq!(items.len(), 4 + room_count + 6);
        // First item is the first hotel, followed by its rooms
        assert!(matches!(items[0], SearchItem::Property(h) if h.slug == "kayjay-amorea"));
        assert!(matches!(items[1], SearchItem::Room { .. }));
        // Pages come last
        assert!(matches!(items[items.len() - 1], SearchItem::Page(_)));
    }

    #[test]
    fn test_searchable_text_includes_inherited_fields() {
        let hotel = hotel_by_slug("kayjay-amorea").unwrap();
        let room = &hotel.rooms[0];
        let text = SearchItem::Room { room, hotel }.searchable_text();
        assert!(text.contains("kayjay amorea"), "room inherits hotel name");
        assert!(text.contains("wattala"), "room inherits hotel location");
        assert!(text.contains("budget affordable"), "room carries its price tier");
    }

    #[test]
    fn test_categorize_features_order_and_fallback() {
        let features = vec![
            "Mini Fridge".to_string(),
            "Sea View".to_string(),
            "Something Unmapped".to_string(),
        ];
        let grouped = categorize_features(&features);
        assert_eq!(grouped[0].0, "View & Location");
        assert_eq!(grouped[1].0, "Amenities & Comfort");
        assert_eq!(grouped[2].0, "Highlights");
        assert_eq!(grouped[2].1, vec!["Something Unmapped"]);
    }

    #[test]
    fn test_price_from_skips_full_house() {
        let hotel = hotel_by_slug("kay-jay-beach-house").unwrap();
        assert_eq!(hotel.price_from(), Some(15_000));
    }
}
