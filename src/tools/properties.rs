//! Properties tool implementation
//!
//! Lists the corpus or shows one property with its rooms, amenities and
//! categorized features.

use crate::catalog::{self, categorize_features, Hotel, Room, RoomRates};
use crate::cli::PropertiesArgs;
use crate::error::AppError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PropertySummary {
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub location: String,
    pub star_rating: Option<u8>,
    pub room_count: usize,
    /// Cheapest room-only LKR price across standard rooms
    pub price_from_lkr: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomDetail {
    pub id: String,
    pub name: String,
    pub capacity: String,
    pub rates: RoomRates,
    pub price_tier: &'static str,
    pub max_adults: u32,
    pub max_children: u32,
    pub total_capacity: Option<u32>,
    pub full_house: bool,
    pub features: Vec<FeatureGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetail {
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub location: String,
    pub star_rating: Option<u8>,
    pub searchable_amenities: Vec<String>,
    pub detailed_features: Vec<FeatureGroup>,
    pub rooms: Vec<RoomDetail>,
}

fn room_detail(room: &Room) -> RoomDetail {
    RoomDetail {
        id: room.id.clone(),
        name: room.name.clone(),
        capacity: room.capacity.clone(),
        rates: room.rates,
        price_tier: room.price_tier(),
        max_adults: room.max_adults,
        max_children: room.max_children,
        total_capacity: room.total_capacity,
        full_house: room.full_house,
        features: categorize_features(&room.features)
            .into_iter()
            .map(|(category, items)| FeatureGroup {
                category: category.to_string(),
                items: items.into_iter().map(String::from).collect(),
            })
            .collect(),
    }
}

fn property_detail(hotel: &Hotel) -> PropertyDetail {
    PropertyDetail {
        name: hotel.name.clone(),
        slug: hotel.slug.clone(),
        tagline: hotel.tagline.clone(),
        description: hotel.description.clone(),
        location: hotel.location.clone(),
        star_rating: hotel.star_rating,
        searchable_amenities: hotel.searchable_amenities.clone(),
        detailed_features: hotel
            .detailed_features
            .iter()
            .map(|g| FeatureGroup {
                category: g.title.clone(),
                items: g.items.clone(),
            })
            .collect(),
        rooms: hotel.rooms.iter().map(room_detail).collect(),
    }
}

/// List all properties
pub fn execute_properties_list() -> Vec<PropertySummary> {
    catalog::hotels()
        .iter()
        .map(|hotel| PropertySummary {
            name: hotel.name.clone(),
            slug: hotel.slug.clone(),
            tagline: hotel.tagline.clone(),
            location: hotel.location.clone(),
            star_rating: hotel.star_rating,
            room_count: hotel.rooms.len(),
            price_from_lkr: hotel.price_from(),
        })
        .collect()
}

/// Show one property by slug
pub fn execute_property(slug: &str) -> Result<PropertyDetail, AppError> {
    catalog::hotel_by_slug(slug)
        .map(property_detail)
        .ok_or_else(|| AppError::NotFound(format!("No property with slug '{}'", slug)))
}

/// Dispatch on the presence of a slug
pub fn execute_properties(args: &PropertiesArgs) -> Result<String, AppError> {
    match &args.slug {
        Some(slug) => Ok(format_property(&execute_property(slug)?)),
        None => Ok(format_properties_list(&execute_properties_list())),
    }
}

pub fn format_properties_list(properties: &[PropertySummary]) -> String {
    let mut md = format!("# Our Properties · {}\n\n", properties.len());
    for property in properties {
        md.push_str(&format!(
            "## {}\n\n{}\n\n- Slug: `{}`\n- Location: {}\n- Rooms: {}\n",
            property.name, property.tagline, property.slug, property.location, property.room_count
        ));
        if let Some(from) = property.price_from_lkr {
            md.push_str(&format!("- From: LKR {} per night (room only)\n", from));
        }
        md.push('\n');
    }
    md
}

pub fn format_property(property: &PropertyDetail) -> String {
    let mut md = format!(
        "# {}\n\n*{}*\n\n{}\n\n**Location:** {}\n\n",
        property.name, property.tagline, property.description, property.location
    );

    md.push_str("## Amenities\n\n");
    md.push_str(&property.searchable_amenities.join(", "));
    md.push_str("\n\n## Rooms\n\n");

    for room in &property.rooms {
        md.push_str(&format!(
            "### {} ({})\n\n- Room only: LKR {}\n- Bed & breakfast: LKR {}\n- Half board: LKR {}\n- Full board: LKR {}\n",
            room.name,
            room.capacity,
            room.rates.room_only,
            room.rates.bed_breakfast,
            room.rates.half_board,
            room.rates.full_board
        ));
        for group in &room.features {
            md.push_str(&format!("- {}: {}\n", group.category, group.items.join(", ")));
        }
        md.push('\n');
    }

    for group in &property.detailed_features {
        md.push_str(&format!("## {}\n\n", group.category));
        for item in &group.items {
            md.push_str(&format!("- {}\n", item));
        }
        md.push('\n');
    }

    md
}
