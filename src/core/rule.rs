//! Rules as first-class values.
//!
//! A `Rule` is a named pure predicate over a field's current value. Rule
//! sets are ordered; the order only matters when evaluation stops at the
//! first failure.

use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Named predicate over a field value.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::Rule;
///
/// let has_digit = Rule::new("has-digit", |v: &str| v.chars().any(|c| c.is_ascii_digit()))
///     .with_message("Must contain a digit");
///
/// assert!(has_digit.check("abc1"));
/// assert!(!has_digit.check("abc"));
/// assert_eq!(has_digit.message(), "Must contain a digit");
/// ```
pub struct Rule {
    name: String,
    message: Option<String>,
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Rule {
    /// Create a rule from a pure predicate.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Rule {
            name: name.into(),
            message: None,
            predicate: Box::new(predicate),
        }
    }

    /// Attach the message reported when this rule fails in collect mode.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failure message, falling back to the rule name.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered group of rules applied to one value.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, keeping insertion order.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule eagerly, in order.
    pub fn results(&self, value: &str) -> Vec<bool> {
        self.rules.iter().map(|rule| rule.check(value)).collect()
    }

    /// First failing rule. Rules after it are never invoked.
    pub fn first_failure(&self, value: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| !rule.check(value))
    }

    /// Per-rule outcome, for requirement checklists.
    pub fn checklist(&self, value: &str) -> Vec<(&str, bool)> {
        self.rules
            .iter()
            .map(|rule| (rule.name(), rule.check(value)))
            .collect()
    }

    /// Run every rule and accumulate the messages of all that fail.
    pub fn collect(&self, value: &str) -> Validation<(), NonEmptyVec<String>> {
        let mut failures = self
            .rules
            .iter()
            .filter(|rule| !rule.check(value))
            .map(|rule| rule.message().to_string());

        match failures.next() {
            None => Validation::Success(()),
            Some(head) => Validation::Failure(NonEmptyVec::new(head, failures.collect())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn length_rules() -> RuleSet {
        RuleSet::new()
            .with(Rule::new("min-3", |v: &str| v.len() >= 3).with_message("Too short"))
            .with(Rule::new("max-5", |v: &str| v.len() <= 5).with_message("Too long"))
            .with(Rule::new("no-space", |v: &str| !v.contains(' ')))
    }

    #[test]
    fn results_keep_rule_order() {
        let rules = length_rules();
        assert_eq!(rules.results("ab cdef"), vec![true, false, false]);
        assert_eq!(rules.results("abcd"), vec![true, true, true]);
    }

    #[test]
    fn first_failure_stops_early() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let rules = RuleSet::new()
            .with(Rule::new("never", |_: &str| false))
            .with(Rule::new("counted", move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }));

        let failed = rules.first_failure("x").map(Rule::name);
        assert_eq!(failed, Some("never"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn checklist_reports_every_rule() {
        let rules = length_rules();
        let checklist = rules.checklist("a b");
        assert_eq!(
            checklist,
            vec![("min-3", true), ("max-5", true), ("no-space", false)]
        );
    }

    #[test]
    fn collect_accumulates_all_messages() {
        let rules = length_rules();

        match rules.collect("a b cdef") {
            Validation::Failure(messages) => {
                let messages: Vec<&str> = messages.iter().map(String::as_str).collect();
                assert_eq!(messages, vec!["Too long", "no-space"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }

        assert!(rules.collect("abc").is_success());
    }

    #[test]
    fn empty_rule_set_passes() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.first_failure("").is_none());
        assert!(rules.collect("").is_success());
    }
}
