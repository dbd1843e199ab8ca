//! Suffix payload expansion for generated variations

/// Suffixes appended to every variation.
///
/// A non-empty payload list always wins over the single append string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appends {
    single: Option<String>,
    payloads: Vec<String>,
}

impl Appends {
    pub fn new(single: Option<String>, payloads: Vec<String>) -> Self {
        Self {
            single: single.filter(|s| !s.is_empty()),
            payloads,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(value: impl Into<String>) -> Self {
        Self::new(Some(value.into()), Vec::new())
    }

    pub fn payloads(payloads: Vec<String>) -> Self {
        Self::new(None, payloads)
    }

    /// Number of outputs produced for each base string
    pub fn fan_out(&self) -> usize {
        self.payloads.len().max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_none() && self.payloads.is_empty()
    }

    /// Concatenate `base` with each applicable suffix, in payload order.
    pub fn expand(&self, base: &str) -> Vec<String> {
        if !self.payloads.is_empty() {
            return self
                .payloads
                .iter()
                .map(|payload| format!("{base}{payload}"))
                .collect();
        }

        match self.single {
            Some(ref suffix) => vec![format!("{base}{suffix}")],
            None => vec![base.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand__payload_list_in_order() {
        let appends = Appends::payloads(vec!["&p1=1".to_string(), "&p2=2".to_string()]);

        assert_eq!(
            appends.expand("http://x.com/?a="),
            vec!["http://x.com/?a=&p1=1", "http://x.com/?a=&p2=2"]
        );
        assert_eq!(appends.fan_out(), 2);
    }

    #[test]
    fn test_expand__payload_list_overrides_single() {
        let appends = Appends::new(Some("IGNORED".to_string()), vec!["'".to_string()]);
        assert_eq!(appends.expand("a="), vec!["a='"]);
    }

    #[test]
    fn test_expand__single_append() {
        let appends = Appends::single("FUZZ");
        assert_eq!(appends.expand("a="), vec!["a=FUZZ"]);
        assert_eq!(appends.fan_out(), 1);
    }

    #[test]
    fn test_expand__empty_single_is_no_append() {
        let appends = Appends::single("");
        assert!(appends.is_empty());
        assert_eq!(appends.expand("a="), vec!["a="]);
    }

    #[test]
    fn test_expand__nothing_configured_returns_base() {
        assert_eq!(Appends::none().expand("http://x/"), vec!["http://x/"]);
    }
}
