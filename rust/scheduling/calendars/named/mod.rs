//! Static data for pre-existing named holiday calendars.
//!

pub mod wa;

use std::collections::HashMap;

use crate::error::{DeadlineError, Result};

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<&'static [u8]> {
    let hmap: HashMap<&str, &[u8]> = HashMap::from([("wa", wa::WEEKMASK)]);
    match hmap.get(name) {
        None => Err(DeadlineError::Config {
            message: format!("'{}' is not found in list of existing calendars.", name),
        }),
        Some(value) => Ok(value),
    }
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<&'static [(u32, u32, &'static str)]> {
    let hmap: HashMap<&str, &[(u32, u32, &str)]> = HashMap::from([("wa", wa::HOLIDAYS)]);
    match hmap.get(name) {
        None => Err(DeadlineError::Config {
            message: format!("'{}' is not found in list of existing calendars.", name),
        }),
        Some(value) => Ok(value),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_weekmask() {
        let result = get_weekmask_by_name("wa").unwrap();
        assert_eq!(result, &[5, 6]);
    }

    #[test]
    fn test_get_holidays() {
        let result = get_holidays_by_name("wa").unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(result[0], (1, 1, "New Year's Day"));
    }

    #[test]
    fn test_unknown_name() {
        assert!(get_holidays_by_name("nyc").is_err());
        assert!(get_weekmask_by_name("nyc").is_err());
    }
}
