/// Fixed pool of candidate book titles.
///
/// `title` and `title_without_series` are each drawn from this pool with an
/// independent uniform index, so the two fields rarely agree.
pub const TITLE_POOL: &[&str] = &[
    "Vacation People",
    "Enter the Aardvark",
    "Murder Makes Scents",
    "A Blink of the Screen: Collected Shorter Fiction",
    "Living Your Dreams: How to make a living doing what you love",
    "The Bedroom Experiment (Hot Jocks #5.5)",
    "Sweet Soul (Sweet Home, #4; Carillo Boys, #3)",
    "Would Like to Meet",
    "House of Earth and Blood",
    "Ugly Betty: The Book",
    "The Favorite Daughter",
    "The East End",
    "Jinn's Dominion (Desert Cursed, #3)",
    "Pine & Boof: The Lucky Leaf",
    "Beyond Belief: My Secret Life Inside Scientology and My Harrowing Escape",
    "Spark Joy: An Illustrated Master Class on the Art of Organizing and Tidying Up",
    "You've Been Volunteered: A Class Mom Novel",
    "Clown in a Cornfield",
    "Maksim (Akimov Bratva #1)",
    "Write or Wrong: A Dark College Romance (Write to Love Book 1)",
    "Bruno Has One Hundred Friends",
    "Mr. Cat and the Little Girl",
    "His Gift: A Valentine's Romance Novella",
    "The Crisis of Bad Preaching: Redeeming the Heart and Way of the Catholic Preacher",
    "The Italian Villa",
    "The Tycoon's Fake Fiancee (European Tycoon Book 2)",
    "Zaftig Dating Agency: Series Collection 4-",
    "Ra",
    "The Mind Illuminated: A Complete Meditation Guide Integrating Buddhist Wisdom and Brain Science",
    "New Friends for Zaza",
    "Postmortem (Kay Scarpetta, #1)",
    "The Roman Spring of Mrs. Stone",
    "A Wizard of Earthsea",
    "Dragons & Magic (Dragon's Den Casino #1)",
];

#[cfg(test)]
mod tests {
    use super::TITLE_POOL;

    #[test]
    fn pool_is_non_empty() {
        assert!(!TITLE_POOL.is_empty());
        assert!(TITLE_POOL.iter().all(|title| !title.is_empty()));
    }
}
