//! Structural validation for SBI data models and SDK configuration.
//!
//! Every model implements [`Validate`] by walking its fields through a
//! [`ValidationContext`]. The context keeps the current field path and
//! collects *every* failure instead of stopping at the first one, so a
//! caller gets the complete list of problems in a single pass:
//!
//! ```
//! use fivegc_sdk::models::qos::ArpPriorityLevel;
//! use fivegc_sdk::utils::validation::Validate;
//!
//! assert!(ArpPriorityLevel(15).validate().is_ok());
//! let errors = ArpPriorityLevel(16).validate().unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

use crate::utils::error::{Result, SdkError};
use regex::Regex;
use std::fmt;
use url::Url;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the offending field, e.g. `locationEstimate.pointList[2].lon`.
    /// Empty when the failure belongs to the root record itself.
    pub path: String,
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// All failures found while validating one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                path: path.into(),
                reason: reason.into(),
            }],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any failure was reported at exactly `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone)]
enum Segment {
    Field(&'static str),
    Key(String),
    Index(usize),
}

/// Path-tracking accumulator used by [`Validate`] implementations.
#[derive(Debug, Default)]
pub struct ValidationContext {
    segments: Vec<Segment>,
    errors: Vec<FieldError>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dotted path.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Segment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    /// Record a failure at the current path.
    pub fn report(&mut self, reason: impl Into<String>) {
        let path = self.path();
        self.errors.push(FieldError {
            path,
            reason: reason.into(),
        });
    }

    /// Run `f` with `name` pushed onto the path.
    pub fn at<F: FnOnce(&mut Self)>(&mut self, name: &'static str, f: F) {
        self.segments.push(Segment::Field(name));
        f(self);
        self.segments.pop();
    }

    fn at_key<F: FnOnce(&mut Self)>(&mut self, key: &str, f: F) {
        self.segments.push(Segment::Key(key.to_string()));
        f(self);
        self.segments.pop();
    }

    fn at_index<F: FnOnce(&mut Self)>(&mut self, index: usize, f: F) {
        self.segments.push(Segment::Index(index));
        f(self);
        self.segments.pop();
    }

    pub fn field<T: Validate + ?Sized>(&mut self, name: &'static str, value: &T) {
        self.at(name, |ctx| value.validate_into(ctx));
    }

    pub fn required<T: Validate>(&mut self, name: &'static str, value: &Option<T>) {
        match value {
            Some(v) => self.field(name, v),
            None => self.at(name, |ctx| ctx.report("is required")),
        }
    }

    pub fn optional<T: Validate>(&mut self, name: &'static str, value: &Option<T>) {
        if let Some(v) = value {
            self.field(name, v);
        }
    }

    /// Validate every element of a sequence field.
    pub fn each<T: Validate>(&mut self, name: &'static str, items: &[T]) {
        self.at(name, |ctx| {
            for (i, item) in items.iter().enumerate() {
                ctx.at_index(i, |ctx| item.validate_into(ctx));
            }
        });
    }

    /// Validate a sequence field that must carry at least `min` elements.
    pub fn each_min<T: Validate>(&mut self, name: &'static str, items: &[T], min: usize) {
        if items.len() < min {
            self.at(name, |ctx| {
                ctx.report(format!("must contain at least {} item(s)", min))
            });
        }
        self.each(name, items);
    }

    /// Validate a sequence field bounded on both sides.
    pub fn each_between<T: Validate>(
        &mut self,
        name: &'static str,
        items: &[T],
        min: usize,
        max: usize,
    ) {
        if items.len() < min || items.len() > max {
            self.at(name, |ctx| {
                ctx.report(format!(
                    "must contain between {} and {} items, found {}",
                    min,
                    max,
                    items.len()
                ))
            });
        }
        self.each(name, items);
    }

    pub fn optional_each_min<T: Validate>(
        &mut self,
        name: &'static str,
        items: &Option<Vec<T>>,
        min: usize,
    ) {
        if let Some(items) = items {
            self.each_min(name, items, min);
        }
    }

    /// Validate the values of a map field, using the map keys as path segments.
    pub fn entries<'a, V, I>(&mut self, name: &'static str, entries: I)
    where
        V: Validate + 'a,
        I: IntoIterator<Item = (&'a String, &'a V)>,
    {
        self.at(name, |ctx| {
            for (key, value) in entries {
                ctx.at_key(key, |ctx| value.validate_into(ctx));
            }
        });
    }

    /// Check that `value` matches every pattern in `patterns`.
    pub fn pattern(&mut self, value: &str, patterns: &[(Regex, &'static str)]) {
        for (re, source) in patterns {
            if !re.is_match(value) {
                self.report(format!("'{}' must match pattern {}", value, source));
                return;
            }
        }
    }

    /// Inclusive range check.
    pub fn range<T: PartialOrd + fmt::Display>(&mut self, value: T, min: T, max: T) {
        if value < min || value > max {
            self.report(format!(
                "{} must be between {} and {} (inclusive)",
                value, min, max
            ));
        }
    }

    pub fn minimum<T: PartialOrd + fmt::Display>(&mut self, value: T, min: T) {
        if value < min {
            self.report(format!("{} must be at least {}", value, min));
        }
    }

    /// Report a token outside a closed enumeration.
    pub fn unknown_token(&mut self, value: &str, allowed: &[&str]) {
        self.report(format!(
            "'{}' must be one of {{{}}}",
            value,
            allowed.join(", ")
        ));
    }

    /// Exactly one member of a group must be present.
    pub fn exactly_one(&mut self, group: &[(&str, bool)]) {
        let present = group.iter().filter(|(_, p)| *p).count();
        if present != 1 {
            self.report(format!(
                "exactly one of {} must be present, found {}",
                group_names(group),
                present
            ));
        }
    }

    /// At most one member of a group may be present.
    pub fn at_most_one(&mut self, group: &[(&str, bool)]) {
        let present = group.iter().filter(|(_, p)| *p).count();
        if present > 1 {
            self.report(format!(
                "at most one of {} may be present, found {}",
                group_names(group),
                present
            ));
        }
    }

    /// At least one member of a group must be present.
    pub fn at_least_one(&mut self, group: &[(&str, bool)]) {
        if !group.iter().any(|(_, p)| *p) {
            self.report(format!(
                "at least one of {} must be present",
                group_names(group)
            ));
        }
    }

    /// `name` must be present when `condition` holds.
    pub fn required_when(&mut self, name: &'static str, present: bool, condition: bool, when: &str) {
        if condition && !present {
            self.at(name, |ctx| ctx.report(format!("required when {}", when)));
        }
    }

    /// `name` must be absent when `condition` holds.
    pub fn absent_when(&mut self, name: &'static str, present: bool, condition: bool, when: &str) {
        if condition && present {
            self.at(name, |ctx| ctx.report(format!("must be absent when {}", when)));
        }
    }

    pub fn finish(self) -> std::result::Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

fn group_names(group: &[(&str, bool)]) -> String {
    group
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub trait Validate {
    /// Report every failure of `self` into `ctx`.
    fn validate_into(&self, ctx: &mut ValidationContext);

    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut ctx = ValidationContext::new();
        self.validate_into(&mut ctx);
        ctx.finish()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        (**self).validate_into(ctx)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        for (i, item) in self.iter().enumerate() {
            ctx.at_index(i, |ctx| item.validate_into(ctx));
        }
    }
}

impl Validate for String {
    fn validate_into(&self, _ctx: &mut ValidationContext) {}
}

impl Validate for bool {
    fn validate_into(&self, _ctx: &mut ValidationContext) {}
}

impl Validate for serde_json::Value {
    fn validate_into(&self, _ctx: &mut ValidationContext) {}
}

// Configuration helpers. These fail fast with an `SdkError` naming the field.

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SdkError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// `IP:PORT` or `HOST:PORT` listen address.
pub fn validate_socket_address(field_name: &str, address: &str) -> Result<()> {
    let invalid = |reason: &str| SdkError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: address.to_string(),
        reason: reason.to_string(),
    };

    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| invalid("Address must have the form HOST:PORT"))?;
    if host.is_empty() {
        return Err(invalid("Host part cannot be empty"));
    }
    port.parse::<u16>()
        .map_err(|_| invalid("Port must be a number between 0 and 65535"))?;
    Ok(())
}

/// API roots are empty or start with `/`.
pub fn validate_api_root(field_name: &str, api_root: &str) -> Result<()> {
    if !api_root.is_empty() && !api_root.starts_with('/') {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: api_root.to_string(),
            reason: "API root must be empty or start with '/'".to_string(),
        });
    }
    if api_root.contains(char::is_whitespace) {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: api_root.to_string(),
            reason: "API root cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        low: i32,
        high: i32,
        tags: Vec<Tag>,
    }

    struct Tag(i32);

    impl Validate for Tag {
        fn validate_into(&self, ctx: &mut ValidationContext) {
            ctx.range(self.0, 0, 9);
        }
    }

    impl Validate for Pair {
        fn validate_into(&self, ctx: &mut ValidationContext) {
            ctx.at("low", |ctx| ctx.range(self.low, 1, 15));
            ctx.at("high", |ctx| ctx.range(self.high, 1, 15));
            ctx.each_min("tags", &self.tags, 1);
        }
    }

    #[test]
    fn test_collects_every_failure_with_paths() {
        let pair = Pair {
            low: 0,
            high: 16,
            tags: vec![Tag(1), Tag(10), Tag(-1)],
        };
        let errors = pair.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.has_path("low"));
        assert!(errors.has_path("high"));
        assert!(errors.has_path("tags[1]"));
        assert!(errors.has_path("tags[2]"));
    }

    #[test]
    fn test_min_items() {
        let pair = Pair {
            low: 1,
            high: 15,
            tags: vec![],
        };
        let errors = pair.validate().unwrap_err();
        assert_eq!(errors.errors()[0].path, "tags");
        assert!(errors.errors()[0].reason.contains("at least 1"));
    }

    #[test]
    fn test_group_checks() {
        let mut ctx = ValidationContext::new();
        ctx.exactly_one(&[("tacs", false), ("areaCode", false)]);
        ctx.exactly_one(&[("tacs", true), ("areaCode", true)]);
        ctx.exactly_one(&[("tacs", true), ("areaCode", false)]);
        ctx.at_most_one(&[("a", true), ("b", false), ("c", true)]);
        ctx.at_least_one(&[("a", false), ("b", false)]);
        assert_eq!(ctx.finish().unwrap_err().len(), 4);
    }

    #[test]
    fn test_conditional_requirements() {
        let mut ctx = ValidationContext::new();
        ctx.required_when("restrictionType", false, true, "areas is present");
        ctx.absent_when("maxNumOfTAs", true, false, "restrictionType=NOT_ALLOWED_AREAS");
        let errors = ctx.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].path, "restrictionType");
        assert_eq!(errors.errors()[0].reason, "required when areas is present");
    }

    #[test]
    fn test_display_joins_failures() {
        let mut ctx = ValidationContext::new();
        ctx.at("a", |ctx| ctx.report("is required"));
        ctx.report("root failure");
        let errors = ctx.finish().unwrap_err();
        assert_eq!(errors.to_string(), "a: is required; root failure");
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("client.servers[0].url", "https://example.com").is_ok());
        assert!(validate_url("client.servers[0].url", "http://example.com").is_ok());
        assert!(validate_url("client.servers[0].url", "").is_err());
        assert!(validate_url("client.servers[0].url", "invalid-url").is_err());
        assert!(validate_url("client.servers[0].url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_address() {
        assert!(validate_socket_address("server.address", "127.0.0.1:8080").is_ok());
        assert!(validate_socket_address("server.address", "localhost:29572").is_ok());
        assert!(validate_socket_address("server.address", "127.0.0.1").is_err());
        assert!(validate_socket_address("server.address", ":8080").is_err());
        assert!(validate_socket_address("server.address", "127.0.0.1:99999").is_err());
    }

    #[test]
    fn test_validate_api_root() {
        assert!(validate_api_root("server.api_root", "").is_ok());
        assert!(validate_api_root("server.api_root", "/v1").is_ok());
        assert!(validate_api_root("server.api_root", "v1").is_err());
    }
}
