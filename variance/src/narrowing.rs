//! Narrowing rules per constraint family.
//!
//! `narrower.narrows(wider)` holds when every value accepted by `narrower` is also
//! accepted by `wider`, judged axis by axis. An axis unset on `wider` accepts any
//! setting on `narrower`. An axis set on `wider` and unset on `narrower` never
//! narrows.

use cinch_constraint::{
    Constraint, ConstraintOptions, CountFrom, ListConstraintOptions, ObjectPresenceOptions,
    UploadConstraintOptions,
};

/// Structural "at least as strict as" between two options bags of one family.
pub trait Narrowing {
    /// True if `self` is at least as strict as `wider` on every axis.
    fn narrows(&self, wider: &Self) -> bool;
}

/// Lower bounds: the narrower bound must be at least the wider one.
fn lower<T: PartialOrd>(wider: Option<&T>, narrower: Option<&T>) -> bool {
    match (wider, narrower) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(n)) => n >= w,
    }
}

/// Upper bounds: the narrower bound must be at most the wider one.
fn upper<T: PartialOrd>(wider: Option<&T>, narrower: Option<&T>) -> bool {
    match (wider, narrower) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(n)) => n <= w,
    }
}

/// Allowed-value sets: the narrower set must be contained in the wider one.
fn subset<T: PartialEq>(wider: Option<&[T]>, narrower: Option<&[T]>) -> bool {
    match (wider, narrower) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(n)) => is_subset(n, w),
    }
}

/// Opaque settings: must be identical.
fn identical<T: PartialEq>(wider: Option<&T>, narrower: Option<&T>) -> bool {
    match (wider, narrower) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(n)) => n == w,
    }
}

/// Boolean restrictions: a set flag must stay set.
fn flag(wider: bool, narrower: bool) -> bool {
    !wider || narrower
}

/// Nested options of the same family.
fn nested<T: Narrowing>(wider: Option<&T>, narrower: Option<&T>) -> bool {
    match (wider, narrower) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(n)) => n.narrows(w),
    }
}

fn is_subset<T: PartialEq>(small: &[T], large: &[T]) -> bool {
    small.iter().all(|item| large.contains(item))
}

fn same_set<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    is_subset(a, b) && is_subset(b, a)
}

/// Presence rules, with the count fixed to one for the `*One` forms.
#[derive(Debug, Clone, Copy)]
enum Presence {
    AtLeast,
    AtMost,
    Exactly,
}

impl Presence {
    fn narrows(self, wider: (usize, &[String]), narrower: (usize, &[String])) -> bool {
        let (w_count, w_from) = wider;
        let (n_count, n_from) = narrower;
        match self {
            // More required from fewer candidates.
            Presence::AtLeast => n_count >= w_count && is_subset(n_from, w_from),
            // Fewer allowed from more candidates.
            Presence::AtMost => n_count <= w_count && is_subset(w_from, n_from),
            Presence::Exactly => n_count == w_count && same_set(n_from, w_from),
        }
    }

    fn compare(
        self,
        wider: Option<(usize, &[String])>,
        narrower: Option<(usize, &[String])>,
    ) -> bool {
        match (wider, narrower) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(w), Some(n)) => self.narrows(w, n),
        }
    }
}

fn one(from: &Option<Vec<String>>) -> Option<(usize, &[String])> {
    from.as_deref().map(|f| (1, f))
}

fn counted(rule: &Option<CountFrom>) -> Option<(usize, &[String])> {
    rule.as_ref().map(|r| (r.count, r.from.as_slice()))
}

impl Narrowing for ConstraintOptions {
    fn narrows(&self, wider: &Self) -> bool {
        lower(wider.min.as_ref(), self.min.as_ref())
            && upper(wider.max.as_ref(), self.max.as_ref())
            && subset(wider.one_of.as_deref(), self.one_of.as_deref())
            && lower(wider.min_length.as_ref(), self.min_length.as_ref())
            && upper(wider.max_length.as_ref(), self.max_length.as_ref())
            && identical(wider.regex.as_ref(), self.regex.as_ref())
    }
}

impl Narrowing for ListConstraintOptions {
    fn narrows(&self, wider: &Self) -> bool {
        lower(wider.min_items.as_ref(), self.min_items.as_ref())
            && upper(wider.max_items.as_ref(), self.max_items.as_ref())
            && flag(wider.unique, self.unique)
            && nested(wider.inner_list.as_deref(), self.inner_list.as_deref())
    }
}

impl Narrowing for ObjectPresenceOptions {
    fn narrows(&self, wider: &Self) -> bool {
        Presence::AtLeast.compare(one(&wider.at_least_one), one(&self.at_least_one))
            && Presence::AtMost.compare(one(&wider.at_most_one), one(&self.at_most_one))
            && Presence::Exactly.compare(one(&wider.exactly_one), one(&self.exactly_one))
            && Presence::AtLeast.compare(counted(&wider.at_least), counted(&self.at_least))
            && Presence::AtMost.compare(counted(&wider.at_most), counted(&self.at_most))
            && Presence::Exactly.compare(counted(&wider.exactly), counted(&self.exactly))
    }
}

impl Narrowing for UploadConstraintOptions {
    fn narrows(&self, wider: &Self) -> bool {
        upper(wider.max_size.as_ref(), self.max_size.as_ref())
            && subset(wider.mime_type.as_deref(), self.mime_type.as_deref())
    }
}

/// Constraints of different families never narrow each other.
impl Narrowing for Constraint {
    fn narrows(&self, wider: &Self) -> bool {
        match (wider, self) {
            (Constraint::Scalar(w), Constraint::Scalar(n)) => n.narrows(w),
            (Constraint::List(w), Constraint::List(n)) => n.narrows(w),
            (Constraint::Object(w), Constraint::Object(n)) => n.narrows(w),
            (Constraint::Upload(w), Constraint::Upload(n)) => n.narrows(w),
            _ => false,
        }
    }
}
