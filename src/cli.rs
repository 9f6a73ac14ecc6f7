//! CLI mode implementation
//!
//! Command-line interface over the site operations. The argument
//! structs double as the HTTP API's query/body shapes, so they derive
//! serde and JsonSchema alongside clap.

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kay Jay site services CLI
#[derive(Parser)]
#[command(name = "kayjay")]
#[command(about = "Property search, price quotes and booking inquiries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the JSON HTTP API
    Serve(ServeArgs),
    /// Search properties, rooms and pages
    Search(SearchArgs),
    /// List properties or show one in detail
    Properties(PropertiesArgs),
    /// Filter a property's rooms by party size
    Availability(AvailabilityArgs),
    /// Price a room for a meal plan, currency and payment method
    Quote(QuoteArgs),
    /// Submit a booking inquiry
    Inquire(InquireArgs),
    /// Send a contact message
    Contact(ContactArgs),
    /// Submit a job application
    Careers(CareersArgs),
    /// Read the blog
    Blog(BlogArgs),
    /// Show the currency rate table
    Rates(RatesArgs),
}

/// Server mode arguments
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8787
    #[arg(short = 'a', long)]
    pub addr: Option<String>,
}

/// Search tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Free-text query
    #[arg(short = 'q', long)]
    #[schemars(description = "Free-text query")]
    pub query: String,

    /// Use the header quick-search variant (2+ chars, top 10)
    #[arg(long)]
    #[serde(default)]
    #[schemars(description = "Use the header quick-search variant (2+ chars, top 10)")]
    pub quick: bool,

    /// Maximum number of results
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results")]
    pub limit: Option<usize>,
}

/// Properties tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct PropertiesArgs {
    /// Property slug; omit to list all properties
    #[arg(short = 's', long)]
    #[schemars(description = "Property slug; omit to list all properties")]
    pub slug: Option<String>,
}

/// Availability tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct AvailabilityArgs {
    /// Property slug
    #[arg(short = 's', long)]
    #[schemars(description = "Property slug")]
    pub hotel: String,

    /// Number of adults
    #[arg(long, default_value_t = 1)]
    #[serde(default = "default_adults")]
    #[schemars(description = "Number of adults")]
    pub adults: u32,

    /// Number of children
    #[arg(long, default_value_t = 0)]
    #[serde(default)]
    #[schemars(description = "Number of children")]
    pub children: u32,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    #[schemars(description = "Check-in date (YYYY-MM-DD)")]
    pub check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    #[schemars(description = "Check-out date (YYYY-MM-DD)")]
    pub check_out: Option<String>,
}

/// Quote tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct QuoteArgs {
    /// Property slug
    #[arg(short = 's', long)]
    #[schemars(description = "Property slug")]
    pub hotel: String,

    /// Room id within the property
    #[arg(short = 'r', long)]
    #[schemars(description = "Room id within the property")]
    pub room: String,

    /// Meal plan: RO, BB, HB or FB
    #[arg(short = 'm', long, default_value = "RO")]
    #[serde(default = "default_meal_plan")]
    #[schemars(description = "Meal plan: RO, BB, HB or FB")]
    pub meal_plan: String,

    /// Display currency: LKR, USD, EUR, GBP, AUD or CAD
    #[arg(short = 'c', long, default_value = "LKR")]
    #[serde(default = "default_currency")]
    #[schemars(description = "Display currency: LKR, USD, EUR, GBP, AUD or CAD")]
    pub currency: String,

    /// Payment method: standard, commercial or hnb
    #[arg(short = 'p', long, default_value = "standard")]
    #[serde(default = "default_payment")]
    #[schemars(description = "Payment method: standard, commercial or hnb")]
    pub payment: String,

    /// Number of adults, for the custom-inquiry flag
    #[arg(long)]
    #[schemars(description = "Number of adults, for the custom-inquiry flag")]
    pub adults: Option<u32>,

    /// Number of children, for the custom-inquiry flag
    #[arg(long)]
    #[schemars(description = "Number of children, for the custom-inquiry flag")]
    pub children: Option<u32>,
}

/// Inquire tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct InquireArgs {
    /// Property slug
    #[arg(short = 's', long)]
    #[schemars(description = "Property slug")]
    pub hotel: String,

    /// Room id; omit for a whole-property custom inquiry
    #[arg(short = 'r', long)]
    #[schemars(description = "Room id; omit for a whole-property custom inquiry")]
    pub room: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    #[schemars(description = "Check-in date (YYYY-MM-DD)")]
    pub check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    #[schemars(description = "Check-out date (YYYY-MM-DD)")]
    pub check_out: Option<String>,

    /// Number of adults
    #[arg(long, default_value_t = 1)]
    #[serde(default = "default_adults")]
    #[schemars(description = "Number of adults")]
    pub adults: u32,

    /// Number of children
    #[arg(long, default_value_t = 0)]
    #[serde(default)]
    #[schemars(description = "Number of children")]
    pub children: u32,

    /// Meal plan: RO, BB, HB or FB
    #[arg(short = 'm', long, default_value = "RO")]
    #[serde(default = "default_meal_plan")]
    #[schemars(description = "Meal plan: RO, BB, HB or FB")]
    pub meal_plan: String,

    /// Display currency for the quoted price
    #[arg(short = 'c', long, default_value = "LKR")]
    #[serde(default = "default_currency")]
    #[schemars(description = "Display currency for the quoted price")]
    pub currency: String,

    /// Payment method: standard, commercial or hnb
    #[arg(short = 'p', long, default_value = "standard")]
    #[serde(default = "default_payment")]
    #[schemars(description = "Payment method: standard, commercial or hnb")]
    pub payment: String,

    /// Submission channel: email or whatsapp
    #[arg(long, default_value = "email")]
    #[serde(default = "default_channel")]
    #[schemars(description = "Submission channel: email or whatsapp")]
    pub channel: String,

    /// Guest name
    #[arg(short = 'n', long)]
    #[schemars(description = "Guest name")]
    pub name: String,

    /// Guest email address
    #[arg(short = 'e', long)]
    #[schemars(description = "Guest email address")]
    pub email: String,

    /// Guest phone number
    #[arg(long)]
    #[schemars(description = "Guest phone number")]
    pub phone: Option<String>,
}

/// Contact tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct ContactArgs {
    /// Sender name
    #[arg(short = 'n', long)]
    #[schemars(description = "Sender name")]
    pub name: String,

    /// Sender email address
    #[arg(short = 'e', long)]
    #[schemars(description = "Sender email address")]
    pub email: String,

    /// Sender phone number
    #[arg(long)]
    #[schemars(description = "Sender phone number")]
    pub phone: Option<String>,

    /// Message subject
    #[arg(long)]
    #[schemars(description = "Message subject")]
    pub subject: Option<String>,

    /// Message body
    #[arg(short = 'm', long)]
    #[schemars(description = "Message body")]
    pub message: String,
}

/// Careers tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct CareersArgs {
    /// Applicant name
    #[arg(short = 'n', long)]
    #[schemars(description = "Applicant name")]
    pub name: String,

    /// Applicant email address
    #[arg(short = 'e', long)]
    #[schemars(description = "Applicant email address")]
    pub email: String,

    /// Applicant phone number
    #[arg(long)]
    #[schemars(description = "Applicant phone number")]
    pub phone: Option<String>,

    /// Position applied for
    #[arg(short = 'p', long)]
    #[schemars(description = "Position applied for")]
    pub position: String,

    /// Cover letter text
    #[arg(long)]
    #[schemars(description = "Cover letter text")]
    pub cover_letter: String,
}

/// Blog command arguments
#[derive(Parser, Debug)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: BlogCommands,
}

#[derive(Subcommand, Debug)]
pub enum BlogCommands {
    /// List the latest posts
    List {
        /// Maximum number of posts
        #[arg(short = 'l', long, default_value_t = 10)]
        limit: usize,
    },
    /// Read one post by slug
    Read {
        /// Post slug
        slug: String,
    },
    /// List blog categories
    Categories,
    /// List posts in one category
    Category {
        /// Category slug
        slug: String,
    },
}

/// Rates tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct RatesArgs {
    /// Wait for the live rate fetch instead of reporting pending
    #[arg(long)]
    #[serde(default)]
    #[schemars(description = "Wait for the live rate fetch instead of reporting pending")]
    pub wait: bool,
}

fn default_adults() -> u32 {
    1
}

fn default_meal_plan() -> String {
    "RO".to_string()
}

fn default_currency() -> String {
    "LKR".to_string()
}

fn default_payment() -> String {
    "standard".to_string()
}

fn default_channel() -> String {
    "email".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let args = SearchArgs {
            query: "pool safari".to_string(),
            quick: false,
            limit: Some(10),
        };
        assert_eq!(args.query, "pool safari");
        assert_eq!(args.limit, Some(10));
    }

    #[test]
    fn test_quote_args_serde_defaults() {
        let args: QuoteArgs = serde_json::from_value(serde_json::json!({
            "hotel": "kayjay-amorea",
            "room": "102"
        }))
        .unwrap();
        assert_eq!(args.meal_plan, "RO");
        assert_eq!(args.currency, "LKR");
        assert_eq!(args.payment, "standard");
    }

    #[test]
    fn test_inquire_args_serde_defaults() {
        let args: InquireArgs = serde_json::from_value(serde_json::json!({
            "hotel": "kay-jay-wild",
            "name": "Guest",
            "email": "guest@example.com"
        }))
        .unwrap();
        assert_eq!(args.adults, 1);
        assert_eq!(args.children, 0);
        assert_eq!(args.channel, "email");
    }
}
