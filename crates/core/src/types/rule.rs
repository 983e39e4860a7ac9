//! Social rules and the ordered catalog they are matched from.

use std::borrow::Cow;

/// Errors that can occur when building a [`RuleCatalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no rules.
    #[error("rule catalog cannot be empty")]
    Empty,
    /// A rule has an empty trigger, which would match every command.
    #[error("rule `{id}` has an empty trigger")]
    EmptyTrigger {
        /// Anchor id of the offending rule.
        id: String,
    },
    /// Two rules share the same trigger; the second could never match.
    #[error("trigger `{trigger}` is declared more than once")]
    DuplicateTrigger {
        /// The repeated trigger.
        trigger: String,
    },
}

/// A canned social rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Title shown as the attachment heading.
    pub title: Cow<'static, str>,
    /// Full descriptive text.
    pub description: Cow<'static, str>,
    /// Section anchor in the manual, e.g. `no-feigned-surprise`.
    pub id: Cow<'static, str>,
    /// The rule matches any command containing this substring.
    pub trigger: Cow<'static, str>,
}

impl Rule {
    /// Create a rule from static catalog text.
    #[must_use]
    pub const fn new_static(
        title: &'static str,
        description: &'static str,
        id: &'static str,
        trigger: &'static str,
    ) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            id: Cow::Borrowed(id),
            trigger: Cow::Borrowed(trigger),
        }
    }

    /// Returns true if `command` contains this rule's trigger.
    #[must_use]
    pub fn is_triggered_by(&self, command: &str) -> bool {
        command.contains(self.trigger.as_ref())
    }

    /// Link to this rule's section of the manual at `manual_url`.
    #[must_use]
    pub fn uri(&self, manual_url: &str) -> String {
        format!("{manual_url}/#{}", self.id)
    }
}

/// An immutable, ordered list of rules.
///
/// Declaration order is match priority: [`RuleCatalog::find`] returns the
/// first rule whose trigger is contained in the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    manual_url: Cow<'static, str>,
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog from rules in priority order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rules` is empty
    /// - a rule has an empty trigger
    /// - two rules share a trigger
    pub fn new(
        manual_url: impl Into<Cow<'static, str>>,
        rules: Vec<Rule>,
    ) -> Result<Self, CatalogError> {
        if rules.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, rule) in rules.iter().enumerate() {
            if rule.trigger.is_empty() {
                return Err(CatalogError::EmptyTrigger {
                    id: rule.id.to_string(),
                });
            }

            if rules
                .iter()
                .take(index)
                .any(|earlier| earlier.trigger == rule.trigger)
            {
                return Err(CatalogError::DuplicateTrigger {
                    trigger: rule.trigger.to_string(),
                });
            }
        }

        Ok(Self {
            manual_url: manual_url.into(),
            rules,
        })
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the first rule, in declaration order, triggered by `command`.
    #[must_use]
    pub fn find(&self, command: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.is_triggered_by(command))
    }

    /// Link to `rule`'s section of this catalog's manual.
    #[must_use]
    pub fn uri_for(&self, rule: &Rule) -> String {
        rule.uri(&self.manual_url)
    }

    /// Pairs `(a, b)` where `a`'s trigger is contained in `b`'s trigger.
    ///
    /// For such a pair, any command that triggers `b` also triggers `a`, so
    /// whichever of the two is declared first shadows the other.
    #[must_use]
    pub fn overlapping_triggers(&self) -> Vec<(&Rule, &Rule)> {
        let mut pairs = Vec::new();
        for a in &self.rules {
            for b in &self.rules {
                if !std::ptr::eq(a, b) && b.trigger.contains(a.trigger.as_ref()) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rule(id: &'static str, trigger: &'static str) -> Rule {
        Rule::new_static("Title", "Description", id, trigger)
    }

    #[test]
    fn test_uri_joins_manual_and_anchor() {
        let r = rule("no-backseat-driving", "backseat");
        assert_eq!(
            r.uri("https://example.com/manual"),
            "https://example.com/manual/#no-backseat-driving"
        );
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let result = RuleCatalog::new("https://example.com", Vec::new());
        assert_eq!(result, Err(CatalogError::Empty));
    }

    #[test]
    fn test_new_rejects_empty_trigger() {
        let result = RuleCatalog::new("https://example.com", vec![rule("catch-all", "")]);
        assert!(matches!(result, Err(CatalogError::EmptyTrigger { id }) if id == "catch-all"));
    }

    #[test]
    fn test_new_rejects_duplicate_trigger() {
        let result = RuleCatalog::new(
            "https://example.com",
            vec![rule("first", "ping"), rule("second", "ping")],
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateTrigger { trigger }) if trigger == "ping"
        ));
    }

    #[test]
    fn test_find_matches_substring() {
        let catalog = RuleCatalog::new("https://example.com", vec![rule("s", "surprise")]).unwrap();
        assert_eq!(catalog.find("pleasesurprise").map(|r| r.id.as_ref()), Some("s"));
        assert_eq!(catalog.find("surprised").map(|r| r.id.as_ref()), Some("s"));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let catalog = RuleCatalog::new("https://example.com", vec![rule("s", "surprise")]).unwrap();
        assert!(catalog.find("SURPRISE").is_none());
    }

    #[test]
    fn test_find_returns_none_without_match() {
        let catalog = RuleCatalog::new("https://example.com", vec![rule("s", "surprise")]).unwrap();
        assert!(catalog.find("foobar").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_find_first_declared_wins() {
        let catalog = RuleCatalog::new(
            "https://example.com",
            vec![rule("first", "back"), rule("second", "seat")],
        )
        .unwrap();
        assert_eq!(catalog.find("backseat").map(|r| r.id.as_ref()), Some("first"));
        assert_eq!(catalog.find("seatback").map(|r| r.id.as_ref()), Some("first"));
        assert_eq!(catalog.find("seat").map(|r| r.id.as_ref()), Some("second"));
    }

    #[test]
    fn test_overlapping_triggers_reports_contained_pairs() {
        let catalog = RuleCatalog::new(
            "https://example.com",
            vec![rule("short", "act"), rule("long", "actually")],
        )
        .unwrap();

        let pairs: Vec<_> = catalog
            .overlapping_triggers()
            .into_iter()
            .map(|(a, b)| (a.id.as_ref(), b.id.as_ref()))
            .collect();
        assert_eq!(pairs, vec![("short", "long")]);
        assert_eq!(catalog.find("wellactually").map(|r| r.id.as_ref()), Some("short"));
    }
}
