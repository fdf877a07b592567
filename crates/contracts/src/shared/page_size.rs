//! Page sizes the catalog table can be switched between.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rows per catalog page. Only the listed sizes are offered, so any other
/// value cannot reach the pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    Ten,
    #[default]
    Twenty,
}

impl PageSize {
    /// All options in ascending order, as shown in the selector
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Twenty];

    pub const fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("Unsupported page size: {} (expected 5, 10 or 20)", value))
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Invalid page size '{}': {}", s, e))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twenty() {
        assert_eq!(PageSize::default(), PageSize::Twenty);
        assert_eq!(PageSize::default().get(), 20);
    }

    #[test]
    fn test_options_are_ascending() {
        let values: Vec<usize> = PageSize::ALL.iter().map(|s| s.get()).collect();
        assert_eq!(values, vec![5, 10, 20]);
    }

    #[test]
    fn test_parse_from_select_value() {
        assert_eq!("10".parse::<PageSize>(), Ok(PageSize::Ten));
        assert_eq!(" 5 ".parse::<PageSize>(), Ok(PageSize::Five));
        assert!("15".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
        assert!(PageSize::try_from(0).is_err());
    }

    #[test]
    fn test_serde_uses_bare_number() {
        assert_eq!(serde_json::to_string(&PageSize::Ten).unwrap(), "10");
        assert_eq!(serde_json::from_str::<PageSize>("5").unwrap(), PageSize::Five);
        assert!(serde_json::from_str::<PageSize>("7").is_err());
    }
}
