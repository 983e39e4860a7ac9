//! The Recurse Center social rules.
//!
//! See <https://www.recurse.com/manual#sub-sec-social-rules>.

use crate::types::{CatalogError, Rule, RuleCatalog};

/// Base URL of the Recurse Center manual.
pub const MANUAL_URL: &str = "https://www.recurse.com/manual";

/// No feigning surprise.
pub const SURPRISE: Rule = Rule::new_static(
    "No feigning surprise",
    r#"The first rule means you shouldn't act surprised when people say they don't know something. This applies to both technical things ("What?! I can't believe you don't know what the stack is!") and non-technical things ("You don't know who RMS is?!"). Feigning surprise has absolutely no social or educational benefit: When people feign surprise, it's usually to make them feel better about themselves and others feel worse. And even when that's not the intention, it's almost always the effect. As you've probably already guessed, this rule is tightly coupled to our belief in the importance of people feeling comfortable saying "I don't know" and "I don't understand.""#,
    "no-feigned-surprise",
    "surprise",
);

/// No well-actually's.
pub const WELL_ACTUALLY: Rule = Rule::new_static(
    "No well-actually's",
    r#"A well-actually happens when someone says something that's almost—but not entirely—correct, and you say, "well, actually…" and then give a minor correction. This is especially annoying when the correction has no bearing on the actual conversation. This doesn't mean that we aren't about truth-seeking or that we don't care about being precise. Almost all well-actually's in our experience are about grandstanding, not truth-seeking."#,
    "no-well-actuallys",
    "actually",
);

/// No back-seat driving.
pub const BACKSEAT: Rule = Rule::new_static(
    "No back-seat driving",
    r#"If you overhear people working through a problem, you shouldn't intermittently lob advice across the room. This can lead to the "too many cooks" problem, but more important, it can be rude and disruptive to half-participate in a conversation. This isn't to say you shouldn't help, offer advice, or join conversations. On the contrary, we encourage all those things. Rather, it just means that when you want to help out or work with others, you should fully engage and not just butt in sporadically."#,
    "no-backseat-driving",
    "backseat",
);

/// No subtle -isms.
pub const SUBTLE: Rule = Rule::new_static(
    "No subtle -isms",
    r#"Our last social rule bans subtle racism, sexism, homophobia, transphobia, and other kinds of bias. This one is different from the rest, because it covers a class of behaviors instead of one very specific pattern. Subtle -isms are small things that make others feel uncomfortable, things that we all sometimes do by mistake. For example, saying "It's so easy my grandmother could do it" is a subtle -ism. Like the other three social rules, this one is often accidentally broken. Like the other three, it's not a big deal to mess up – you just apologize and move on."#,
    "no-subtle-isms",
    "subtle",
);

impl RuleCatalog {
    /// The four Recurse Center social rules, in match priority order.
    ///
    /// # Errors
    ///
    /// Never fails for the shipped rules; the `Result` comes from
    /// [`RuleCatalog::new`] validation.
    pub fn recurse_social_rules() -> Result<Self, CatalogError> {
        Self::new(MANUAL_URL, vec![SURPRISE, WELL_ACTUALLY, BACKSEAT, SUBTLE])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> RuleCatalog {
        RuleCatalog::recurse_social_rules().unwrap()
    }

    #[test]
    fn test_declaration_order() {
        let ids: Vec<_> = catalog().rules().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(
            ids,
            [
                "no-feigned-surprise",
                "no-well-actuallys",
                "no-backseat-driving",
                "no-subtle-isms",
            ]
        );
    }

    #[test]
    fn test_usage_keywords_match_their_rules() {
        let catalog = catalog();
        let cases = [
            ("surprise", "No feigning surprise"),
            ("wellactually", "No well-actually's"),
            ("backseat", "No back-seat driving"),
            ("subtle", "No subtle -isms"),
        ];
        for (keyword, title) in cases {
            let rule = catalog.find(keyword).unwrap();
            assert_eq!(rule.title, title, "keyword {keyword}");
        }
    }

    #[test]
    fn test_surrounding_text_still_matches() {
        let catalog = catalog();
        assert_eq!(catalog.find("pleasesurprise").unwrap().id, "no-feigned-surprise");
        assert_eq!(catalog.find("actually!").unwrap().id, "no-well-actuallys");
        assert_eq!(catalog.find("nobackseatdriving").unwrap().id, "no-backseat-driving");
    }

    #[test]
    fn test_command_with_two_triggers_uses_first_declared() {
        let catalog = catalog();
        assert_eq!(catalog.find("subtlesurprise").unwrap().id, "no-feigned-surprise");
        assert_eq!(catalog.find("backseat-actually").unwrap().id, "no-well-actuallys");
    }

    #[test]
    fn test_no_trigger_contains_another() {
        let catalog = catalog();
        let overlaps: Vec<_> = catalog
            .overlapping_triggers()
            .into_iter()
            .map(|(a, b)| (a.trigger.to_string(), b.trigger.to_string()))
            .collect();
        assert!(overlaps.is_empty(), "overlapping triggers: {overlaps:?}");
    }

    #[test]
    fn test_help_matches_no_rule() {
        assert!(catalog().find("help").is_none());
    }

    #[test]
    fn test_uris_point_into_manual() {
        let catalog = catalog();
        assert_eq!(
            catalog.uri_for(&SUBTLE),
            "https://www.recurse.com/manual/#no-subtle-isms"
        );
    }
}
