//! User-selected focus areas

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A topic the user wants tips biased towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    Sprinklers,
    Thermostat,
    Solar,
}

impl Focus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Focus::Sprinklers => "sprinklers",
            Focus::Thermostat => "thermostat",
            Focus::Solar => "solar",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Focus {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "sprinklers" => Ok(Focus::Sprinklers),
            "thermostat" => Ok(Focus::Thermostat),
            "solar" => Ok(Focus::Solar),
            _ => Err(()),
        }
    }
}

/// Set of recognized focus areas. Unknown tokens are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusSelector {
    selected: BTreeSet<Focus>,
}

impl FocusSelector {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a selector from raw tokens, ignoring anything unrecognized
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = tokens
            .into_iter()
            .filter_map(|token| token.as_ref().parse().ok())
            .collect();
        Self { selected }
    }

    /// Resolve the request's `focus` / `focuses` fields.
    ///
    /// A non-empty `focuses` list wins; otherwise the single `focus` token is used.
    #[must_use]
    pub fn from_request(focus: Option<&str>, focuses: Option<&[String]>) -> Self {
        match focuses {
            Some(list) if !list.is_empty() => Self::from_tokens(list),
            _ => Self::from_tokens(focus),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn contains(&self, focus: Focus) -> bool {
        self.selected.contains(&focus)
    }

    pub fn iter(&self) -> impl Iterator<Item = Focus> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_focus_tokens() {
        assert_eq!("thermostat".parse::<Focus>(), Ok(Focus::Thermostat));
        assert_eq!("Sprinklers".parse::<Focus>(), Ok(Focus::Sprinklers));
        assert_eq!(" SOLAR ".parse::<Focus>(), Ok(Focus::Solar));
        assert!("lighting".parse::<Focus>().is_err());
    }

    #[test]
    fn test_unrecognized_tokens_are_ignored() {
        let selector = FocusSelector::from_tokens(["lighting", "laundry"]);
        assert!(selector.is_empty());

        let selector = FocusSelector::from_tokens(["lighting", "solar"]);
        assert!(selector.contains(Focus::Solar));
        assert_eq!(selector.iter().count(), 1);
    }

    #[test]
    fn test_single_token_and_list_normalize_alike() {
        let single = FocusSelector::from_request(Some("thermostat"), None);
        let tokens = vec!["thermostat".to_string()];
        let list = FocusSelector::from_request(None, Some(tokens.as_slice()));
        assert_eq!(single, list);
    }

    #[test]
    fn test_non_empty_list_takes_precedence() {
        let focuses = vec!["solar".to_string()];
        let selector = FocusSelector::from_request(Some("thermostat"), Some(focuses.as_slice()));
        assert!(selector.contains(Focus::Solar));
        assert!(!selector.contains(Focus::Thermostat));

        let none: Vec<String> = Vec::new();
        let selector = FocusSelector::from_request(Some("thermostat"), Some(none.as_slice()));
        assert!(selector.contains(Focus::Thermostat));
    }

    #[test]
    fn test_repeated_tokens_collapse() {
        let selector = FocusSelector::from_tokens(["solar", "solar", "Solar"]);
        assert_eq!(selector.iter().collect::<Vec<_>>(), vec![Focus::Solar]);
    }
}
