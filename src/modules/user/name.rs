use crate::error::{Result, UserhubError};

/// Apply an update's name parts to a stored `"first last"` name.
///
/// `first` replaces the first token, then `last` replaces the second token of
/// the result. Empty parts are ignored. A replacement needs the current name
/// to split into at least two whitespace-separated tokens; tokens past the
/// second are dropped.
pub fn rename(stored: &str, first: Option<&str>, last: Option<&str>) -> Result<String> {
    let mut name = stored.to_string();

    if let Some(first) = first.filter(|part| !part.is_empty()) {
        let (_, second) = split(&name)?;
        name = format!("{} {}", first, second);
    }
    if let Some(last) = last.filter(|part| !part.is_empty()) {
        let (first, _) = split(&name)?;
        name = format!("{} {}", first, last);
    }

    Ok(name)
}

fn split(name: &str) -> Result<(&str, &str)> {
    let mut tokens = name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(UserhubError::MalformedName),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_keeps_last_token() {
        assert_eq!(rename("Ada Lovelace", Some("Augusta"), None).unwrap(), "Augusta Lovelace");
    }

    #[test]
    fn last_name_keeps_first_token() {
        assert_eq!(rename("Ada Lovelace", None, Some("Byron")).unwrap(), "Ada Byron");
    }

    #[test]
    fn both_parts_apply_in_order() {
        assert_eq!(
            rename("Ada Lovelace", Some("Augusta"), Some("King")).unwrap(),
            "Augusta King"
        );
    }

    #[test]
    fn nothing_to_change_returns_stored_name() {
        assert_eq!(rename("Ada  Lovelace", None, Some("")).unwrap(), "Ada  Lovelace");
    }

    #[test]
    fn extra_whitespace_and_tokens_collapse() {
        assert_eq!(rename("  Ada   Lovelace  Byron ", Some("Augusta"), None).unwrap(), "Augusta Lovelace");
    }

    #[test]
    fn single_token_name_is_malformed() {
        assert!(matches!(
            rename("Cher", Some("Sonny"), None),
            Err(UserhubError::MalformedName)
        ));
        assert!(matches!(
            rename("", None, Some("Bono")),
            Err(UserhubError::MalformedName)
        ));
    }
}
