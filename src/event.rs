use chrono::{Local, NaiveDateTime};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use rand::Rng;
use serde::Serialize;

use crate::titles::TITLE_POOL;

/// Placeholder literals carried on every event, intentionally non-randomized.
pub const SPOILER_STATE: &str = "No state";
pub const REVIEW_ADDED_DATE: &str = "Tue Feb 11 18:08:25 -0800 2020";
pub const REVIEW_UPDATED_DATE: &str = "Tue Feb 11 18:18:25 -0800 2020";
pub const BOOK_FORMAT: &str = "Book";
pub const EDITION_INFORMATION: &str = "No information";
pub const PUBLISHER: &str = "fake publisher";
pub const DESCRIPTION: &str = "fake description";

/// Contribution role attached to the generated author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Editor,
    Illustrator,
}

/// One synthesized review event carrying every field for all four
/// downstream tables before projection.
///
/// The four IDs are drawn independently; nothing ties a `book_id` to an
/// `author_id` beyond both living on the same event. `record_create_timestamp`
/// is captured once per event and shared by all four projections.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEvent {
    // review
    pub review_id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub author_id: i64,
    pub review_text: String,
    pub review_rating: f64,
    pub review_votes: i64,
    pub spoiler_flag: bool,
    pub spoiler_state: &'static str,
    pub review_added_date: &'static str,
    pub review_updated_date: &'static str,
    pub review_read_count: i64,
    pub comments_count: i64,
    pub review_url: String,

    // user
    pub user_name: String,
    pub user_display_name: String,
    pub location: String,
    pub profile_link: String,
    pub uri: String,
    pub user_image_url: String,
    pub small_image_url: String,
    pub has_image: bool,

    // book
    pub title: &'static str,
    pub title_without_series: &'static str,
    pub image_url: String,
    pub book_url: String,
    pub num_pages: i64,
    pub format: &'static str,
    pub edition_information: &'static str,
    pub publisher: &'static str,
    pub publication_day: i64,
    pub publication_year: i64,
    pub publication_month: i64,
    pub ratings_count: i64,
    pub description: &'static str,
    pub published: i64,

    // author
    pub name: String,
    pub role: Role,
    pub profile_url: String,
    pub average_rating: f64,
    pub rating_count: i64,
    pub text_review_count: i64,

    pub record_create_timestamp: NaiveDateTime,
}

impl FlatEvent {
    /// Draw one event from the faker backend and the fixed title pool.
    ///
    /// Side-effect-free aside from consuming entropy from `rng`.
    pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let review_text: String = Paragraph(3..8).fake_with_rng(rng);

        Self {
            review_id: rng.random_range(0..=10_000_000),
            user_id: rng.random_range(0..=100_000),
            book_id: rng.random_range(0..=100_000),
            author_id: rng.random_range(0..=100_000),
            review_text: normalize_whitespace(&review_text),
            review_rating: rating(rng),
            review_votes: rng.random_range(0..=1_000_000),
            spoiler_flag: rng.random_bool(0.5),
            spoiler_state: SPOILER_STATE,
            review_added_date: REVIEW_ADDED_DATE,
            review_updated_date: REVIEW_UPDATED_DATE,
            review_read_count: rng.random_range(0..=1_000_000),
            comments_count: rng.random_range(0..=1_000_000),
            review_url: image_url(rng),

            user_name: Name().fake_with_rng(rng),
            user_display_name: Name().fake_with_rng(rng),
            location: postal_address(rng),
            profile_link: image_url(rng),
            uri: image_url(rng),
            user_image_url: image_url(rng),
            small_image_url: image_url(rng),
            has_image: rng.random_bool(0.5),

            title: pick_title(rng),
            title_without_series: pick_title(rng),
            image_url: image_url(rng),
            book_url: image_url(rng),
            num_pages: rng.random_range(10..=1000),
            format: BOOK_FORMAT,
            edition_information: EDITION_INFORMATION,
            publisher: PUBLISHER,
            publication_day: rng.random_range(1..=28),
            publication_year: rng.random_range(1900..=2100),
            publication_month: rng.random_range(1..=12),
            ratings_count: rng.random_range(0..=1_000_000),
            description: DESCRIPTION,
            published: rng.random_range(0..=10),

            name: Name().fake_with_rng(rng),
            role: pick_role(rng),
            profile_url: image_url(rng),
            average_rating: rating(rng),
            rating_count: rng.random_range(0..=1_000_000),
            text_review_count: rng.random_range(0..=1_000_000),

            record_create_timestamp: Local::now().naive_local(),
        }
    }
}

/// Collapse newlines and runs of whitespace into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let value: f64 = rng.random_range(0.0..=5.0);
    (value * 100.0).round() / 100.0
}

fn pick_title<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TITLE_POOL[rng.random_range(0..TITLE_POOL.len())]
}

fn pick_role<R: Rng + ?Sized>(rng: &mut R) -> Role {
    if rng.random_bool(0.5) {
        Role::Editor
    } else {
        Role::Illustrator
    }
}

fn image_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let width = rng.random_range(200..=1024);
    let height = rng.random_range(200..=1024);
    format!("https://picsum.photos/{width}/{height}")
}

fn postal_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateName().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}, {city}, {state} {zip}")
}
