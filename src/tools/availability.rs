//! Availability tool implementation
//!
//! Filters a property's rooms by party size and splits them into
//! full-house options and standard rooms. When nothing suits, the
//! caller is pointed at a custom inquiry instead of an empty page.

use crate::catalog::{self, Room, RoomRates};
use crate::cli::AvailabilityArgs;
use crate::error::{validate_guests, validate_stay_dates, AppError};
use serde::Serialize;

use super::parse_date;

#[derive(Debug, Clone, Serialize)]
pub struct RoomOption {
    pub id: String,
    pub name: String,
    pub capacity: String,
    pub rates: RoomRates,
    pub price_tier: &'static str,
    pub full_house: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub hotel: String,
    pub slug: String,
    pub adults: u32,
    pub children: u32,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub full_house_options: Vec<RoomOption>,
    pub standard_rooms: Vec<RoomOption>,
    /// No room suits the party; route to a custom inquiry
    pub custom_inquiry_needed: bool,
}

fn room_option(room: &Room) -> RoomOption {
    RoomOption {
        id: room.id.clone(),
        name: room.name.clone(),
        capacity: room.capacity.clone(),
        rates: room.rates,
        price_tier: room.price_tier(),
        full_house: room.full_house,
    }
}

pub fn execute_availability(args: &AvailabilityArgs) -> Result<AvailabilityResponse, AppError> {
    validate_guests(args.adults)?;
    let check_in = parse_date(args.check_in.as_deref(), "check-in")?;
    let check_out = parse_date(args.check_out.as_deref(), "check-out")?;
    validate_stay_dates(check_in, check_out)?;

    let hotel = catalog::hotel_by_slug(&args.hotel)
        .ok_or_else(|| AppError::NotFound(format!("No property with slug '{}'", args.hotel)))?;

    let suitable: Vec<&Room> = hotel
        .rooms
        .iter()
        .filter(|room| room.suits(args.adults, args.children))
        .collect();

    let full_house_options: Vec<RoomOption> = suitable
        .iter()
        .copied()
        .filter(|r| r.full_house)
        .map(room_option)
        .collect();
    let standard_rooms: Vec<RoomOption> = suitable
        .iter()
        .copied()
        .filter(|r| !r.full_house)
        .map(room_option)
        .collect();

    Ok(AvailabilityResponse {
        hotel: hotel.name.clone(),
        slug: hotel.slug.clone(),
        adults: args.adults,
        children: args.children,
        check_in: check_in.map(|d| d.to_string()),
        check_out: check_out.map(|d| d.to_string()),
        custom_inquiry_needed: suitable.is_empty(),
        full_house_options,
        standard_rooms,
    })
}

pub fn format_availability(response: &AvailabilityResponse) -> String {
    let mut md = format!(
        "# Available Rooms at {}\n\nShowing options for {} Adults & {} Children",
        response.hotel, response.adults, response.children
    );
    if let (Some(ci), Some(co)) = (&response.check_in, &response.check_out) {
        md.push_str(&format!(" from {} to {}", ci, co));
    }
    md.push_str(".\n\nThis is an availability inquiry; a reservations agent will confirm your booking.\n\n");

    if response.custom_inquiry_needed {
        md.push_str(
            "No standard option fits this party size. Submit a custom inquiry and our team \
             will review your request for special arrangements.\n",
        );
        return md;
    }

    if !response.full_house_options.is_empty() {
        md.push_str("## Full House\n\n");
        for room in &response.full_house_options {
            md.push_str(&format!(
                "- {} ({}) · from LKR {} (room only)\n",
                room.name, room.capacity, room.rates.room_only
            ));
        }
        md.push('\n');
        if !response.standard_rooms.is_empty() {
            md.push_str("## Or Choose an Individual Room\n\n");
        }
    } else if !response.standard_rooms.is_empty() {
        md.push_str("## Choose Your Room\n\n");
    }

    for room in &response.standard_rooms {
        md.push_str(&format!(
            "- `{}` {} ({}) · from LKR {} (room only)\n",
            room.id, room.name, room.capacity, room.rates.room_only
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(hotel: &str, adults: u32, children: u32) -> AvailabilityArgs {
        AvailabilityArgs {
            hotel: hotel.to_string(),
            adults,
            children,
            check_in: None,
            check_out: None,
        }
    }

    #[test]
    fn test_small_party_gets_standard_rooms_and_full_house() {
        let response = execute_availability(&args("kay-jay-beach-house", 2, 1)).unwrap();
        assert!(!response.custom_inquiry_needed);
        // The whole-villa option always fits a small party
        assert_eq!(response.full_house_options.len(), 1);
        assert!(response
            .standard_rooms
            .iter()
            .any(|r| r.name == "Double Room"));
    }

    #[test]
    fn test_children_bound_filters_rooms() {
        // Two children: the double (max 1 child) drops out, the suite stays
        let response = execute_availability(&args("kay-jay-beach-house", 2, 2)).unwrap();
        assert!(!response.standard_rooms.iter().any(|r| r.name == "Double Room"));
        assert!(response.standard_rooms.iter().any(|r| r.name == "Suite"));
    }

    #[test]
    fn test_large_party_gets_only_group_options() {
        let response = execute_availability(&args("kay-jay-wild", 18, 2)).unwrap();
        assert!(!response.custom_inquiry_needed);
        // Only the full house and the 20-person dorm can host 20 guests
        assert_eq!(response.full_house_options.len(), 1);
        assert_eq!(response.standard_rooms.len(), 1);
        assert!(response.standard_rooms[0].name.starts_with("Dorm"));
    }

    #[test]
    fn test_oversized_party_needs_custom_inquiry() {
        let response = execute_availability(&args("kayjay-amorea", 30, 10)).unwrap();
        assert!(response.custom_inquiry_needed);
        assert!(response.full_house_options.is_empty());
        assert!(response.standard_rooms.is_empty());
        let md = format_availability(&response);
        assert!(md.contains("custom inquiry"));
    }

    #[test]
    fn test_unknown_hotel_is_not_found() {
        let err = execute_availability(&args("nowhere", 2, 0)).unwrap_err();
        assert_eq!(err.error_code(), "not_found");
    }

    #[test]
    fn test_zero_adults_is_invalid() {
        let err = execute_availability(&args("kayjay-amorea", 0, 2)).unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }

    #[test]
    fn test_inverted_dates_are_invalid() {
        let mut a = args("kayjay-amorea", 2, 0);
        a.check_in = Some("2026-09-04".to_string());
        a.check_out = Some("2026-09-01".to_string());
        assert_eq!(
            execute_availability(&a).unwrap_err().error_code(),
            "invalid_input"
        );
    }
}
