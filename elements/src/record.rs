use derive_more::Display;

/// A single catalog entry in the two-line element format
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// All three lines are stored whitespace-trimmed and otherwise unvalidated.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "name")]
pub struct ElementRecord {
    /// Object name, AKA line 0
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl ElementRecord {
    pub fn new<N, L1, L2>(name: N, line1: L1, line2: L2) -> Self
    where
        N: AsRef<str>,
        L1: AsRef<str>,
        L2: AsRef<str>,
    {
        Self {
            name: name.as_ref().trim().to_owned(),
            line1: line1.as_ref().trim().to_owned(),
            line2: line2.as_ref().trim().to_owned(),
        }
    }

    /// Whitespace-delimited tokens of line 2
    pub fn line2_tokens(&self) -> impl Iterator<Item = &str> {
        self.line2.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_each_line() {
        let r = ElementRecord::new("  ISS (ZARYA)  ", "\t1 25544U ", " 2 25544  51.6 ");
        assert_eq!(r.name, "ISS (ZARYA)");
        assert_eq!(r.line1, "1 25544U");
        assert_eq!(r.line2, "2 25544  51.6");
        assert_eq!(r.to_string(), "ISS (ZARYA)");
    }

    #[test]
    fn line2_tokens_split_on_runs_of_whitespace() {
        let r = ElementRecord::new("GEO1", "", "2 37481   2.3847  40.6385 0001640");
        let tokens: Vec<&str> = r.line2_tokens().collect();
        assert_eq!(tokens, vec!["2", "37481", "2.3847", "40.6385", "0001640"]);
    }
}
