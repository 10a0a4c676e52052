//! `KEY=VALUE` argument parsing for `--env` and `--headers`.

use std::collections::BTreeMap;

use crate::error::CliError;

/// Parse `KEY=VALUE` items into a map. Later keys win.
///
/// The value may itself contain `=`; the key may not be empty.
pub fn parse_pairs(items: &[String], flag: &str) -> Result<BTreeMap<String, String>, CliError> {
    let mut map = BTreeMap::new();
    for item in items {
        let Some((key, value)) = item.split_once('=') else {
            return Err(CliError::Arguments(format!(
                "{flag} expects KEY=VALUE, got '{item}'"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Arguments(format!(
                "{flag} has an empty key in '{item}'"
            )));
        }
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_pairs() {
        let map = parse_pairs(&items(&["A=1", "TOKEN=abc=def", "A=2"]), "--env").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["A"], "2");
        assert_eq!(map["TOKEN"], "abc=def");
    }

    #[test]
    fn test_parse_pairs_rejects_malformed() {
        let err = parse_pairs(&items(&["NOVALUE"]), "--env").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(parse_pairs(&items(&["=x"]), "--headers").is_err());
    }

    #[test]
    fn test_empty_value_allowed() {
        let map = parse_pairs(&items(&["EMPTY="]), "--env").unwrap();
        assert_eq!(map["EMPTY"], "");
    }
}
