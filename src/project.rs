//! Projections from a flat review event into the four per-table rows.
//!
//! Struct field declaration order defines CSV column order; the `COLUMNS`
//! constants must stay in lockstep with the fields.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::error;

use crate::event::{FlatEvent, Role};

/// One row of the reviews table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
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
    pub record_create_timestamp: NaiveDateTime,
}

impl ReviewRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "review_id",
        "user_id",
        "book_id",
        "author_id",
        "review_text",
        "review_rating",
        "review_votes",
        "spoiler_flag",
        "spoiler_state",
        "review_added_date",
        "review_updated_date",
        "review_read_count",
        "comments_count",
        "review_url",
        "record_create_timestamp",
    ];
}

impl From<&FlatEvent> for ReviewRow {
    fn from(event: &FlatEvent) -> Self {
        Self {
            review_id: event.review_id,
            user_id: event.user_id,
            book_id: event.book_id,
            author_id: event.author_id,
            review_text: event.review_text.clone(),
            review_rating: event.review_rating,
            review_votes: event.review_votes,
            spoiler_flag: event.spoiler_flag,
            spoiler_state: event.spoiler_state,
            review_added_date: event.review_added_date,
            review_updated_date: event.review_updated_date,
            review_read_count: event.review_read_count,
            comments_count: event.comments_count,
            review_url: event.review_url.clone(),
            record_create_timestamp: event.record_create_timestamp,
        }
    }
}

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub user_id: i64,
    pub user_name: String,
    pub user_display_name: String,
    pub location: String,
    pub profile_link: String,
    pub uri: String,
    pub user_image_url: String,
    pub small_image_url: String,
    pub has_image: bool,
    pub record_create_timestamp: NaiveDateTime,
}

impl UserRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "user_name",
        "user_display_name",
        "location",
        "profile_link",
        "uri",
        "user_image_url",
        "small_image_url",
        "has_image",
        "record_create_timestamp",
    ];
}

impl From<&FlatEvent> for UserRow {
    fn from(event: &FlatEvent) -> Self {
        Self {
            user_id: event.user_id,
            user_name: event.user_name.clone(),
            user_display_name: event.user_display_name.clone(),
            location: event.location.clone(),
            profile_link: event.profile_link.clone(),
            uri: event.uri.clone(),
            user_image_url: event.user_image_url.clone(),
            small_image_url: event.small_image_url.clone(),
            has_image: event.has_image,
            record_create_timestamp: event.record_create_timestamp,
        }
    }
}

/// One row of the author table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRow {
    pub author_id: i64,
    pub name: String,
    pub role: Role,
    pub profile_url: String,
    pub average_rating: f64,
    pub rating_count: i64,
    pub text_review_count: i64,
    pub record_create_timestamp: NaiveDateTime,
}

impl AuthorRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "author_id",
        "name",
        "role",
        "profile_url",
        "average_rating",
        "rating_count",
        "text_review_count",
        "record_create_timestamp",
    ];
}

impl From<&FlatEvent> for AuthorRow {
    fn from(event: &FlatEvent) -> Self {
        Self {
            author_id: event.author_id,
            name: event.name.clone(),
            role: event.role,
            profile_url: event.profile_url.clone(),
            average_rating: event.average_rating,
            rating_count: event.rating_count,
            text_review_count: event.text_review_count,
            record_create_timestamp: event.record_create_timestamp,
        }
    }
}

/// One row of the book table.
///
/// The event's `author_id` is duplicated here under the column name
/// `authors`; there is no other link between the book and author tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRow {
    pub book_id: i64,
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
    pub average_rating: f64,
    pub ratings_count: i64,
    pub description: &'static str,
    pub authors: i64,
    pub published: i64,
    pub record_create_timestamp: NaiveDateTime,
}

impl BookRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "book_id",
        "title",
        "title_without_series",
        "image_url",
        "book_url",
        "num_pages",
        "format",
        "edition_information",
        "publisher",
        "publication_day",
        "publication_year",
        "publication_month",
        "average_rating",
        "ratings_count",
        "description",
        "authors",
        "published",
        "record_create_timestamp",
    ];
}

impl From<&FlatEvent> for BookRow {
    fn from(event: &FlatEvent) -> Self {
        Self {
            book_id: event.book_id,
            title: event.title,
            title_without_series: event.title_without_series,
            image_url: event.image_url.clone(),
            book_url: event.book_url.clone(),
            num_pages: event.num_pages,
            format: event.format,
            edition_information: event.edition_information,
            publisher: event.publisher,
            publication_day: event.publication_day,
            publication_year: event.publication_year,
            publication_month: event.publication_month,
            average_rating: event.average_rating,
            ratings_count: event.ratings_count,
            description: event.description,
            authors: event.author_id,
            published: event.published,
            record_create_timestamp: event.record_create_timestamp,
        }
    }
}

/// Lenient projection: a missing event logs an error and yields no row
/// instead of failing the pipeline.
pub fn project_review(event: Option<&FlatEvent>) -> Option<ReviewRow> {
    match event {
        Some(event) => Some(ReviewRow::from(event)),
        None => {
            error!("review event is missing, skipping review projection");
            None
        }
    }
}

/// Lenient projection for the user table. See [`project_review`].
pub fn project_user(event: Option<&FlatEvent>) -> Option<UserRow> {
    match event {
        Some(event) => Some(UserRow::from(event)),
        None => {
            error!("review event is missing, skipping user projection");
            None
        }
    }
}

/// Lenient projection for the author table. See [`project_review`].
pub fn project_author(event: Option<&FlatEvent>) -> Option<AuthorRow> {
    match event {
        Some(event) => Some(AuthorRow::from(event)),
        None => {
            error!("review event is missing, skipping author projection");
            None
        }
    }
}

/// Lenient projection for the book table. See [`project_review`].
pub fn project_book(event: Option<&FlatEvent>) -> Option<BookRow> {
    match event {
        Some(event) => Some(BookRow::from(event)),
        None => {
            error!("review event is missing, skipping book projection");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn sample_event() -> FlatEvent {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        FlatEvent::synthesize(&mut rng)
    }

    #[test]
    fn book_row_duplicates_author_id_as_authors() {
        let event = sample_event();
        let book = BookRow::from(&event);
        assert_eq!(book.authors, event.author_id);
        assert_eq!(book.book_id, event.book_id);
    }

    #[test]
    fn projections_share_the_event_timestamp() {
        let event = sample_event();
        let review = ReviewRow::from(&event);
        let user = UserRow::from(&event);
        let author = AuthorRow::from(&event);
        let book = BookRow::from(&event);
        assert_eq!(review.record_create_timestamp, event.record_create_timestamp);
        assert_eq!(user.record_create_timestamp, event.record_create_timestamp);
        assert_eq!(author.record_create_timestamp, event.record_create_timestamp);
        assert_eq!(book.record_create_timestamp, event.record_create_timestamp);
    }

    #[test]
    fn missing_event_projects_to_none() {
        assert!(project_review(None).is_none());
        assert!(project_user(None).is_none());
        assert!(project_author(None).is_none());
        assert!(project_book(None).is_none());
    }

    #[test]
    fn present_event_projects_to_rows() {
        let event = sample_event();
        assert!(project_review(Some(&event)).is_some());
        assert!(project_user(Some(&event)).is_some());
        assert!(project_author(Some(&event)).is_some());
        assert!(project_book(Some(&event)).is_some());
    }
}
