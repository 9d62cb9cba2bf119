use std::fmt;

use chrono::NaiveDate;

use super::{
    is_future_date_from, is_not_empty, is_positive_number, is_strong_password, is_valid_email,
    is_valid_number,
};

/// A single form-field constraint backed by one of the predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Number,
    NonNegative,
    Email,
    StrongPassword,
    /// Input is an ISO `YYYY-MM-DD` date on or after the reference day.
    FutureDate,
}

impl Rule {
    pub fn from_name(name: &str) -> Option<Rule> {
        match name.trim().to_ascii_lowercase().as_str() {
            "required" => Some(Rule::Required),
            "number" => Some(Rule::Number),
            "non-negative" | "positive" => Some(Rule::NonNegative),
            "email" => Some(Rule::Email),
            "password" | "strong-password" => Some(Rule::StrongPassword),
            "future-date" | "date" => Some(Rule::FutureDate),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required => "This field is required",
            Rule::Number => "Enter a number using digits and at most one decimal point",
            Rule::NonNegative => "Enter an amount of zero or more",
            Rule::Email => "Enter a valid email address",
            Rule::StrongPassword => {
                "Use at least 8 characters with upper and lower case letters and a digit"
            }
            Rule::FutureDate => "Choose today or a later date",
        }
    }

    pub fn passes(&self, input: &str, today: NaiveDate) -> bool {
        match self {
            Rule::Required => is_not_empty(input),
            Rule::Number => is_valid_number(input),
            Rule::NonNegative => is_positive_number(input),
            Rule::Email => is_valid_email(input),
            Rule::StrongPassword => is_strong_password(input),
            Rule::FutureDate => NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|date| is_future_date_from(&date, today))
                .unwrap_or(false),
        }
    }

    pub fn check(&self, field: &str, input: &str, today: NaiveDate) -> Result<(), FieldIssue> {
        if self.passes(input, today) {
            Ok(())
        } else {
            Err(FieldIssue {
                field: field.to_string(),
                rule: *self,
                message: self.message().to_string(),
            })
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rule::Required => "required",
            Rule::Number => "number",
            Rule::NonNegative => "non-negative",
            Rule::Email => "email",
            Rule::StrongPassword => "strong-password",
            Rule::FutureDate => "future-date",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects rule failures across the fields of one form submission.
///
/// Each field reports at most one issue: the first rule it fails.
#[derive(Debug, Clone)]
pub struct FormCheck {
    today: NaiveDate,
    issues: Vec<FieldIssue>,
}

impl FormCheck {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            issues: Vec::new(),
        }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn field(&mut self, name: &str, input: &str, rules: &[Rule]) -> &mut Self {
        let failure = rules
            .iter()
            .find_map(|rule| rule.check(name, input, self.today).err());
        if let Some(issue) = failure {
            tracing::debug!(field = name, rule = %issue.rule, "form field failed validation");
            self.issues.push(issue);
        }
        self
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn finish(self) -> Result<(), Vec<FieldIssue>> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self.issues)
        }
    }
}
