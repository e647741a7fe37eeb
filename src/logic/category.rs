//! Category heuristics
//!
//! Categories are guessed from filename substrings. Rules are checked in a
//! fixed priority order and the first match wins, so "cat-person.png" is
//! an animal, not a person.

use crate::model::types::Category;

/// Substring rules in priority order
const RULES: &[(&[&str], Category)] = &[
    (&["cat", "dog", "animal"], Category::Animals),
    (&["face", "person", "man", "woman"], Category::People),
    (&["meme", "funny"], Category::Classic),
];

/// Guess the category of a template from its filename
///
/// # Examples
/// ```
/// use memegallery::logic::category::categorize;
/// use memegallery::model::types::Category;
///
/// assert_eq!(categorize("happy_cat.png"), Category::Animals);
/// assert_eq!(categorize("office-worker.jpg"), Category::People);
/// assert_eq!(categorize("classic_meme.gif"), Category::Classic);
/// assert_eq!(categorize("random123.png"), Category::General);
/// ```
pub fn categorize(filename: &str) -> Category {
    let name = filename.to_lowercase();

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_examples() {
        assert_eq!(categorize("happy_cat.png"), Category::Animals);
        assert_eq!(categorize("office-worker.jpg"), Category::People);
        assert_eq!(categorize("classic_meme.gif"), Category::Classic);
        assert_eq!(categorize("random123.png"), Category::General);
    }

    #[test]
    fn test_priority_animals_before_people() {
        assert_eq!(categorize("cat-person.png"), Category::Animals);
        assert_eq!(categorize("dog_face.jpg"), Category::Animals);
    }

    #[test]
    fn test_priority_people_before_classic() {
        assert_eq!(categorize("funny-face.png"), Category::People);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("GRUMPY_CAT.PNG"), Category::Animals);
        assert_eq!(categorize("Woman-Yelling.jpg"), Category::People);
        assert_eq!(categorize("FUNNY.gif"), Category::Classic);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "man" inside "batman", "cat" inside "education"
        assert_eq!(categorize("batman.png"), Category::People);
        assert_eq!(categorize("education.png"), Category::Animals);
    }

    #[test]
    fn test_extension_counts_toward_match() {
        // The whole filename is inspected, extension included
        assert_eq!(categorize("drake.meme"), Category::Classic);
    }

    #[test]
    fn test_non_ascii_defaults_to_general() {
        assert_eq!(categorize("犬.png"), Category::General);
    }
}
