//! Identifier slugs — lowercase underscore-separated ids derived from names.

/// Separator placed between words of a generated identifier.
pub const DEFAULT_SEPARATOR: char = '_';

/// Reduce a human-readable name to a stable lowercase identifier.
///
/// ASCII alphanumerics are kept (lowercased); every run of any other
/// characters collapses into a single separator; leading and trailing
/// separators are trimmed. Applying `slugify` to its own output returns
/// it unchanged.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(DEFAULT_SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lowercase_and_join_words_with_underscores() {
        assert_eq!(slugify("Family Room Lamp"), "family_room_lamp");
    }

    #[test]
    fn should_collapse_punctuation_runs_into_one_separator() {
        assert_eq!(slugify("Kitchen - Sink / Light"), "kitchen_sink_light");
    }

    #[test]
    fn should_trim_leading_and_trailing_separators() {
        assert_eq!(slugify("  Attic!  "), "attic");
    }

    #[test]
    fn should_keep_digits() {
        assert_eq!(slugify("Bedroom 2"), "bedroom_2");
    }

    #[test]
    fn should_be_idempotent() {
        let once = slugify("Family Room Lamp");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn should_return_empty_for_names_without_alphanumerics() {
        assert_eq!(slugify("!!!"), "");
    }
}
