use std::collections::HashSet;

/// The caller's username list after normalization: entries are trimmed,
/// empties dropped, and duplicates collapsed case-insensitively. The first
/// occurrence wins and keeps its original casing; input order is preserved
/// so the response rows line up with what the caller sent.
pub struct UsernameQuery {
    usernames: Vec<String>,
}

impl UsernameQuery {
    pub fn parse(users: &[String]) -> UsernameQuery {
        let mut seen = HashSet::new();
        let usernames = users
            .iter()
            .map(|username| username.trim())
            .filter(|username| !username.is_empty())
            .filter(|username| seen.insert(username.to_lowercase()))
            .map(str::to_string)
            .collect();

        UsernameQuery { usernames }
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.usernames.iter().map(String::as_str)
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(users: &[&str]) -> Vec<String> {
        let users = users.iter().map(|user| user.to_string()).collect::<Vec<_>>();
        UsernameQuery::parse(&users).usernames().to_vec()
    }

    #[test]
    fn trims_and_drops_empty_entries() {
        assert_eq!(parse(&["  badger ", "", "   ", "fox"]), ["badger", "fox"]);
    }

    #[test]
    fn collapses_duplicates_case_insensitively() {
        assert_eq!(parse(&["Badger", "badger", " BADGER "]), ["Badger"]);
    }

    #[test]
    fn preserves_input_order() {
        assert_eq!(
            parse(&["zulu", "alpha", "Zulu", "mike"]),
            ["zulu", "alpha", "mike"]
        );
    }

    #[test]
    fn empty_input_parses_to_empty_query() {
        let query = UsernameQuery::parse(&[]);
        assert!(query.is_empty());
        assert_eq!(query.len(), 0);
    }
}
