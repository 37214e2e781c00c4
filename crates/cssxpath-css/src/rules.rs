//! Rewrite rules
//!
//! Every rule is a pattern plus a rewrite callback. The order of
//! [`default_rules`] is load-bearing: attribute brackets and `:contains()` must
//! be protected before whitespace and commas are read as combinators, and
//! placeholders are only resolved once every structural rule has run.
//!
//! Character classes are ASCII-only: a non-breaking space is part of a name,
//! not a combinator, and `ſ` is not a case variant of `s`.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::attribute::attribute_clause;
use crate::relational::expand_relational;
use crate::substitutions::Substitutions;
use crate::translator::Translator;

/// Rewrite callback: produces the replacement text for one match
pub type Rewrite = fn(&Translator, &Captures<'_>, &mut Substitutions) -> String;

/// A single pattern rewrite in the translation pipeline
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
    fixpoint: bool,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("rule pattern is valid"),
            rewrite,
            fixpoint: false,
        }
    }

    /// Rewrite one match per pass until the pattern no longer matches
    fn fixpoint(mut self) -> Self {
        self.fixpoint = true;
        self
    }

    /// Rule name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the rule re-applies until no match remains
    pub fn is_fixpoint(&self) -> bool {
        self.fixpoint
    }

    /// Source of the rule's pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply this rule to the whole working string
    pub fn apply(
        &self,
        translator: &Translator,
        input: &str,
        substitutions: &mut Substitutions,
    ) -> String {
        if !self.fixpoint {
            return self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| {
                    (self.rewrite)(translator, caps, substitutions)
                })
                .into_owned();
        }

        let mut output = input.to_owned();
        while self.pattern.is_match(&output) {
            output = self
                .pattern
                .replacen(&output, 1, |caps: &Captures<'_>| {
                    (self.rewrite)(translator, caps, substitutions)
                })
                .into_owned();
        }
        output
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("fixpoint", &self.fixpoint)
            .finish()
    }
}

/// Input types usable as pseudo-classes, e.g. `input:password`
const INPUT_TYPES: &str = "text|password|checkbox|radio|reset|file|hidden|image|datetime|datetime-local|date|month|time|week|number|range|email|url|search|tel|color";

/// The translation pipeline, in application order
pub(crate) fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("attribute", r"([[:space:]]?)\[(.*?)\]", attribute),
        Rule::new("contains", r":contains\((.*?)\)", contains),
        Rule::new("not", r"([[:space:]]?):not\((.*?)\)", negation),
        Rule::new("whitespace", r"[[:space:]]{2,}", |_, _, _| " ".to_owned()),
        Rule::new("union", r"[[:space:]]*,[[:space:]]*", |_, _, _| "|//".to_owned()),
        Rule::new("input-type", &format!(":({INPUT_TYPES})"), |_, caps, _| {
            format!(r#"[@type="{}"]"#, &caps[1])
        }),
        Rule::new("button", r"([[:space:]]?):button", |_, caps, subs| {
            protect_universal(caps, subs, r#"[self::button or @type="button"]"#)
        }),
        Rule::new("input", r"([[:space:]]?):input", |_, caps, subs| {
            protect_universal(
                caps,
                subs,
                "[self::input or self::select or self::textarea or self::button]",
            )
        }),
        Rule::new("submit", r"([[:space:]]?):submit", |_, caps, subs| {
            protect_universal(caps, subs, r#"[@type="submit" or (self::button and not(@type))]"#)
        }),
        Rule::new("header", ":header", |_, _, subs| {
            subs.protect(
                "*[self::h1 or self::h2 or self::h3 or self::h4 or self::h5 or self::h6]".to_owned(),
            )
        }),
        Rule::new(
            "boolean-attribute",
            ":(autofocus|checked|disabled|required|selected)",
            |_, caps, _| format!("[@{}]", &caps[1]),
        ),
        Rule::new("autocomplete", ":autocomplete", |_, _, _| {
            r#"[@autocomplete="on"]"#.to_owned()
        }),
        Rule::new("nth-child", r"([^[:space:]]*):nth-child\(([0-9]+)\)", |_, caps, _| {
            format!("{}[{}]", tag_or_any(&caps[1]), &caps[2])
        }),
        Rule::new("nth-last-child", r"([^[:space:]]*):nth-last-child\(([0-9]+)\)", |_, caps, _| {
            format!("{}[position()=(last()-({}-1))]", tag_or_any(&caps[1]), &caps[2])
        }),
        Rule::new("last-child", r"([^[:space:]]*):last-child", |_, caps, _| {
            format!("{}[last()]", tag_or_any(&caps[1]))
        }),
        Rule::new("first-child", r"([^[:space:]]*):first-child", |_, caps, _| {
            format!("{}[1]", tag_or_any(&caps[1]))
        }),
        Rule::new("adjacent-sibling", r"[[:space:]]*\+[[:space:]]*([^[:space:]]+)", |_, caps, _| {
            format!("/following-sibling::{}[1]", &caps[1])
        }),
        Rule::new("general-sibling", r"[[:space:]]*~[[:space:]]*([^[:space:]]+)", |_, caps, _| {
            format!("/following-sibling::{}", &caps[1])
        }),
        Rule::new("child", r"[[:space:]]*>[[:space:]]*", |_, _, _| "/".to_owned()),
        Rule::new("descendant", r"[[:space:]]", |_, _, _| "//".to_owned()),
        Rule::new("id", r"(?i-u)([a-z0-9\]]?)#([a-z][-a-z0-9_]+)", |_, caps, _| {
            format!(r#"{}[@id="{}"]"#, tag_or_any(&caps[1]), &caps[2])
        }),
        // One match per pass: consecutive classes (`.a.b`) need the `]` written
        // by the previous pass to know they are not a new universal step
        Rule::new("class", r"(?i-u)([a-z0-9\]]?)\.(-?[_a-z]+[_a-z0-9-]*)", |_, caps, _| {
            format!(
                r#"{}[contains(concat(" ", normalize-space(@class), " "), " {} ")]"#,
                tag_or_any(&caps[1]),
                &caps[2]
            )
        })
        .fixpoint(),
        Rule::new("scope", ":scope", |_, _, _| "//".to_owned()),
        Rule::new("relational", r"^.+!.+$", |_, caps, _| expand_relational(&caps[0])),
        Rule::new("restore", r"\[\{(\d+)\}\]", restore),
    ]
}

fn attribute(_: &Translator, caps: &Captures<'_>, subs: &mut Substitutions) -> String {
    let spaced = !caps[1].is_empty();
    let clause = attribute_clause(&caps[2]);
    let placeholder = subs.protect(universal(spaced, clause));
    if spaced {
        format!(" {placeholder}")
    } else {
        placeholder
    }
}

fn contains(_: &Translator, caps: &Captures<'_>, subs: &mut Substitutions) -> String {
    subs.protect(format!(r#"[contains(text(), "{}")]"#, &caps[1]))
}

fn negation(translator: &Translator, caps: &Captures<'_>, subs: &mut Substitutions) -> String {
    // The nested translation shares this table so its placeholders stay valid
    let inner = translator.translate_with(&caps[2], subs);
    let inner = universal_step_pattern().replacen(&inner, 1, "$1");
    let clause = format!("[not({inner})]");
    subs.protect(universal(!caps[1].is_empty(), clause))
}

fn restore(_: &Translator, caps: &Captures<'_>, subs: &mut Substitutions) -> String {
    caps[1]
        .parse::<usize>()
        .ok()
        .and_then(|index| subs.get(index))
        .unwrap_or(&caps[0])
        .to_owned()
}

/// Matches a leading `//*[...]` so `:not(.a)` keeps only the predicate body
fn universal_step_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^//\*\[(.+)\]").expect("universal step pattern is valid"))
}

fn protect_universal(caps: &Captures<'_>, subs: &mut Substitutions, clause: &str) -> String {
    subs.protect(universal(!caps[1].is_empty(), clause.to_owned()))
}

/// Prefix `*` when the clause starts a new compound selector
fn universal(spaced: bool, clause: String) -> String {
    if spaced { format!("*{clause}") } else { clause }
}

fn tag_or_any(tag: &str) -> &str {
    if tag.is_empty() { "*" } else { tag }
}
