//! Options bags per constraint family.
//!
//! Options are deserialized once from resolved directive arguments and are
//! immutable afterwards. Every axis is optional; an unset axis is not checked.

use cinch_core::{Number, Scalar, Value, Variables};
use regex_lite::Regex;
use serde::Deserialize;
use std::fmt;

use crate::{list, object, scalar, upload, ConstraintResult};

/// A compiled `regex` argument. Two patterns are equal when their source text is.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern. Malformed patterns are rejected here, at attach time.
    pub fn new(source: impl Into<String>) -> Result<Self, regex_lite::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl TryFrom<String> for Pattern {
    type Error = regex_lite::Error;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

/// Options of the scalar constraint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConstraintOptions {
    /// Inclusive lower bound for numbers.
    pub min: Option<Number>,
    /// Inclusive upper bound for numbers.
    pub max: Option<Number>,
    /// Allowed values, compared exactly.
    pub one_of: Option<Vec<Scalar>>,
    /// Minimum string length in code points.
    pub min_length: Option<usize>,
    /// Maximum string length in code points.
    pub max_length: Option<usize>,
    /// Pattern strings must match.
    pub regex: Option<Pattern>,
}

impl ConstraintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: impl Into<Number>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_regex(mut self, pattern: Pattern) -> Self {
        self.regex = Some(pattern);
        self
    }
}

/// Options of the list constraint, one level per list nesting depth.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ListConstraintOptions {
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    /// No two items of this level may be equal.
    pub unique: bool,
    /// Options applied to every non-null item, one level deeper.
    pub inner_list: Option<Box<ListConstraintOptions>>,
}

impl ListConstraintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_inner(mut self, inner: ListConstraintOptions) -> Self {
        self.inner_list = Some(Box::new(inner));
        self
    }

    /// Number of list levels these options describe (1 without `innerList`).
    pub fn depth(&self) -> usize {
        1 + self.inner_list.as_ref().map_or(0, |inner| inner.depth())
    }

    /// True if any level requests uniqueness.
    pub fn requires_unique(&self) -> bool {
        self.unique
            || self
                .inner_list
                .as_ref()
                .is_some_and(|inner| inner.requires_unique())
    }
}

/// A count over a named subset of fields or arguments: `{count, from}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountFrom {
    pub count: usize,
    pub from: Vec<String>,
}

impl CountFrom {
    pub fn new<I, S>(count: usize, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            count,
            from: from.into_iter().map(Into::into).collect(),
        }
    }
}

/// Options of the object presence constraint.
///
/// The `*One` lists are shorthand for a count of one over the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ObjectPresenceOptions {
    pub at_least_one: Option<Vec<String>>,
    pub at_most_one: Option<Vec<String>>,
    pub exactly_one: Option<Vec<String>>,
    pub at_least: Option<CountFrom>,
    pub at_most: Option<CountFrom>,
    pub exactly: Option<CountFrom>,
}

fn names<I, S>(from: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    from.into_iter().map(Into::into).collect()
}

impl ObjectPresenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_at_least_one<I, S>(mut self, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.at_least_one = Some(names(from));
        self
    }

    pub fn with_at_most_one<I, S>(mut self, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.at_most_one = Some(names(from));
        self
    }

    pub fn with_exactly_one<I, S>(mut self, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exactly_one = Some(names(from));
        self
    }

    pub fn with_at_least(mut self, rule: CountFrom) -> Self {
        self.at_least = Some(rule);
        self
    }

    pub fn with_at_most(mut self, rule: CountFrom) -> Self {
        self.at_most = Some(rule);
        self
    }

    pub fn with_exactly(mut self, rule: CountFrom) -> Self {
        self.exactly = Some(rule);
        self
    }

    /// Every field name referenced by any of the six rules.
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        let lists = [&self.at_least_one, &self.at_most_one, &self.exactly_one];
        let counted = [&self.at_least, &self.at_most, &self.exactly];
        lists
            .into_iter()
            .flatten()
            .flatten()
            .chain(counted.into_iter().flatten().flat_map(|rule| &rule.from))
            .map(String::as_str)
    }
}

/// Options of the upload constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UploadConstraintOptions {
    /// Maximum file size in bytes.
    pub max_size: Option<u64>,
    /// Allowed MIME types.
    pub mime_type: Option<Vec<String>>,
}

impl UploadConstraintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(mut self, max: u64) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn with_mime_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_type = Some(names(types));
        self
    }
}

/// The constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Scalar,
    List,
    Object,
    Upload,
}

impl Family {
    /// All families, in evaluation order.
    pub const ALL: [Family; 4] = [Family::Scalar, Family::List, Family::Object, Family::Upload];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Scalar => write!(f, "scalar"),
            Family::List => write!(f, "list"),
            Family::Object => write!(f, "object"),
            Family::Upload => write!(f, "upload"),
        }
    }
}

/// One attached constraint: a family and its options.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Scalar(ConstraintOptions),
    List(ListConstraintOptions),
    Object(ObjectPresenceOptions),
    Upload(UploadConstraintOptions),
}

impl Constraint {
    pub fn family(&self) -> Family {
        match self {
            Constraint::Scalar(_) => Family::Scalar,
            Constraint::List(_) => Family::List,
            Constraint::Object(_) => Family::Object,
            Constraint::Upload(_) => Family::Upload,
        }
    }

    /// Validate a value with the evaluator of this constraint's family.
    pub fn validate(&self, value: &Value, variables: &Variables) -> ConstraintResult<()> {
        match self {
            Constraint::Scalar(options) => scalar::validate_in(value, options, variables),
            Constraint::List(options) => list::validate_in(value, options, variables),
            Constraint::Object(options) => object::validate_value(value, options, variables),
            Constraint::Upload(options) => upload::validate_in(value, options, variables),
        }
    }
}

/// All constraints attached to one site, at most one per family.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintSet {
    pub scalar: Option<ConstraintOptions>,
    pub list: Option<ListConstraintOptions>,
    pub object: Option<ObjectPresenceOptions>,
    pub upload: Option<UploadConstraintOptions>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint. Returns false, leaving the set unchanged, if the family is
    /// already present.
    pub fn insert(&mut self, constraint: Constraint) -> bool {
        if self.contains(constraint.family()) {
            return false;
        }
        match constraint {
            Constraint::Scalar(options) => self.scalar = Some(options),
            Constraint::List(options) => self.list = Some(options),
            Constraint::Object(options) => self.object = Some(options),
            Constraint::Upload(options) => self.upload = Some(options),
        }
        true
    }

    /// Check if a family is present.
    pub fn contains(&self, family: Family) -> bool {
        match family {
            Family::Scalar => self.scalar.is_some(),
            Family::List => self.list.is_some(),
            Family::Object => self.object.is_some(),
            Family::Upload => self.upload.is_some(),
        }
    }

    /// Check if no constraint is attached.
    pub fn is_empty(&self) -> bool {
        Family::ALL.iter().all(|family| !self.contains(*family))
    }
}
