//! Per-type enum descriptors.
//!
//! An `EnumTypeDescriptor` is the summary of one enum type: its members in
//! declaration order plus the lookup tables the resolver and parser need.
//! All values are stored widened to `i64` and normalised with
//! `IntKind::narrow`, so the same code serves every backing width.
//!
//! Descriptors are immutable once built. Typed callers get them from the
//! registry (`descriptor_of`); code that only knows an enum at runtime can
//! build one directly with `EnumTypeDescriptor::new` and use the widened
//! operations here.

use crate::error::EnumError;
use crate::flags;
use crate::options::{NumericFallback, ParseOptions};
use crate::reflect::EnumReflect;
use blazing_common::{EnumRepr, IntKind, eq_with_case, fold_case};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// One declared member, with its value widened to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    name: &'static str,
    value: i64,
    label: Option<&'static str>,
}

impl EnumMember {
    pub const fn new(name: &'static str, value: i64, label: Option<&'static str>) -> Self {
        EnumMember { name, value, label }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }
}

/// Which parse strategy produced a value. Only used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Symbolic,
    Label,
    Numeric,
}

#[derive(Debug)]
pub struct EnumTypeDescriptor {
    type_name: &'static str,
    kind: IntKind,
    is_flags: bool,
    members: Vec<EnumMember>,
    /// Exact name -> first member index.
    by_name: FxHashMap<&'static str, usize>,
    /// Case-folded name -> first member index.
    by_folded_name: FxHashMap<String, usize>,
    /// Value -> first member declared with that value.
    by_value: FxHashMap<i64, usize>,
    /// Non-zero members with distinct values, highest bit pattern first.
    decomposition: Vec<usize>,
}

impl EnumTypeDescriptor {
    /// Build a descriptor from an explicit member list.
    ///
    /// Member values are normalised to `kind`. A repeated name keeps its
    /// first declaration for name lookups.
    pub fn new(
        type_name: &'static str,
        kind: IntKind,
        is_flags: bool,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> Self {
        let members: Vec<EnumMember> = members
            .into_iter()
            .map(|member| EnumMember {
                value: kind.narrow(member.value),
                ..member
            })
            .collect();

        let mut by_name = FxHashMap::default();
        let mut by_folded_name = FxHashMap::default();
        let mut by_value = FxHashMap::default();
        for (idx, member) in members.iter().enumerate() {
            if by_name.contains_key(member.name) {
                warn!(
                    type_name,
                    name = member.name,
                    "duplicate enum member name, keeping the first declaration"
                );
            } else {
                by_name.insert(member.name, idx);
            }
            by_folded_name.entry(fold_case(member.name)).or_insert(idx);
            by_value.entry(member.value).or_insert(idx);
        }

        let mut decomposition: Vec<usize> = by_value
            .values()
            .copied()
            .filter(|&idx| members[idx].value != 0)
            .collect();
        decomposition
            .sort_unstable_by_key(|&idx| std::cmp::Reverse(kind.bit_pattern(members[idx].value)));

        debug!(
            type_name,
            %kind,
            is_flags,
            members = members.len(),
            "built enum descriptor"
        );

        EnumTypeDescriptor {
            type_name,
            kind,
            is_flags,
            members,
            by_name,
            by_folded_name,
            by_value,
            decomposition,
        }
    }

    /// Build the descriptor for a reflected enum type.
    ///
    /// Prefer `descriptor_of::<E>()`, which caches the result.
    pub fn of<E: EnumReflect>() -> Self {
        Self::new(
            E::TYPE_NAME,
            <E::Repr as EnumRepr>::KIND,
            E::IS_FLAGS,
            E::members()
                .iter()
                .map(|decl| EnumMember::new(decl.name, decl.value.widen(), decl.label)),
        )
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn kind(&self) -> IntKind {
        self.kind
    }

    #[inline]
    pub fn is_flags(&self) -> bool {
        self.is_flags
    }

    /// Declared members in declaration order.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Look up a member by its exact symbolic name.
    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.by_name.get(name).map(|&idx| &self.members[idx])
    }

    /// The first member declared with exactly this value.
    pub fn member_by_value(&self, value: i64) -> Option<&EnumMember> {
        self.by_value
            .get(&self.kind.narrow(value))
            .map(|&idx| &self.members[idx])
    }

    /// Whether some member is declared with exactly this value.
    pub fn is_defined(&self, value: i64) -> bool {
        self.by_value.contains_key(&self.kind.narrow(value))
    }

    // =========================================================================
    // Label resolution
    // =========================================================================

    /// Symbolic name of a value.
    ///
    /// An exact member match gives that member's name. For flags enums an
    /// undeclared combination is decomposed into member names, largest bit
    /// pattern first, and listed in ascending order joined by `", "`.
    /// Anything else renders as the decimal integer.
    pub fn name_of(&self, value: i64) -> Cow<'static, str> {
        let value = self.kind.narrow(value);
        if let Some(member) = self.member_by_value(value) {
            return Cow::Borrowed(member.name);
        }
        if self.is_flags {
            if let Some(names) = self.decompose(value) {
                return Cow::Owned(names);
            }
        }
        Cow::Owned(self.kind.format(value))
    }

    /// Display label of a value: the matching member's label, falling back
    /// to `name_of`.
    pub fn label_of(&self, value: i64) -> Cow<'static, str> {
        match self.member_by_value(value) {
            Some(member) => Cow::Borrowed(member.label.unwrap_or(member.name)),
            None => self.name_of(value),
        }
    }

    fn decompose(&self, value: i64) -> Option<String> {
        let mut remaining = self.kind.bit_pattern(value);
        if remaining == 0 {
            return None;
        }

        let mut picked = Vec::new();
        for &idx in &self.decomposition {
            let bits = self.kind.bit_pattern(self.members[idx].value);
            if remaining & bits == bits {
                remaining &= !bits;
                picked.push(self.members[idx].name);
                if remaining == 0 {
                    break;
                }
            }
        }
        if remaining != 0 {
            return None;
        }

        picked.reverse();
        Some(picked.join(", "))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parse `text` into a widened value.
    ///
    /// Strategies run in order on the trimmed text and the first success
    /// wins: symbolic names, member labels, then an integer literal.
    pub fn parse(&self, text: &str, options: ParseOptions) -> Result<i64, EnumError> {
        let trimmed = text.trim();
        let resolved = self
            .try_parse_symbolic(trimmed, options.ignore_case)
            .map(|value| (Strategy::Symbolic, value))
            .or_else(|| {
                self.match_label(trimmed, options.ignore_case)
                    .map(|value| (Strategy::Label, value))
            })
            .or_else(|| {
                self.parse_numeric(trimmed, options.numeric_fallback)
                    .map(|value| (Strategy::Numeric, value))
            });

        match resolved {
            Some((strategy, value)) => {
                trace!(
                    type_name = self.type_name,
                    text = trimmed,
                    ?strategy,
                    value,
                    "parsed enum value"
                );
                Ok(value)
            }
            None => {
                debug!(
                    type_name = self.type_name,
                    text,
                    ignore_case = options.ignore_case,
                    "no enum value matched"
                );
                Err(EnumError::invalid_argument(text, self.type_name))
            }
        }
    }

    /// Resolve declared names only.
    ///
    /// For flags enums `text` may list several names separated by commas;
    /// their values are OR-ed together. Every token must be a name: empty
    /// tokens and unknown names fail the whole input.
    pub fn try_parse_symbolic(&self, text: &str, ignore_case: bool) -> Option<i64> {
        let text = text.trim();
        if !self.is_flags {
            return self
                .lookup_name(text, ignore_case)
                .map(|idx| self.members[idx].value);
        }

        let mut combined = 0i64;
        for token in text.split(',') {
            let idx = self.lookup_name(token.trim(), ignore_case)?;
            combined |= self.members[idx].value;
        }
        Some(self.kind.narrow(combined))
    }

    fn lookup_name(&self, name: &str, ignore_case: bool) -> Option<usize> {
        if let Some(&idx) = self.by_name.get(name) {
            return Some(idx);
        }
        if ignore_case {
            return self.by_folded_name.get(&fold_case(name)).copied();
        }
        None
    }

    fn match_label(&self, text: &str, ignore_case: bool) -> Option<i64> {
        self.members
            .iter()
            .find(|member| eq_with_case(&self.label_of(member.value), text, ignore_case))
            .map(|member| member.value)
    }

    fn parse_numeric(&self, text: &str, fallback: NumericFallback) -> Option<i64> {
        let value = self.kind.parse_literal(text)?;
        match fallback {
            NumericFallback::DeclaredOnlyForOrdinal if !self.is_flags && !self.is_defined(value) => {
                None
            }
            _ => Some(value),
        }
    }

    // =========================================================================
    // Flag algebra on widened values
    // =========================================================================

    pub fn add_flag(&self, value: i64, flag: i64) -> i64 {
        flags::add_widened(self.kind, value, flag)
    }

    pub fn remove_flag(&self, value: i64, flag: i64) -> i64 {
        flags::remove_widened(self.kind, value, flag)
    }

    pub fn set_flag(&self, value: i64, flag: i64, enabled: bool) -> i64 {
        flags::set_widened(self.kind, value, flag, enabled)
    }

    pub fn has_flag(&self, value: i64, flag: i64) -> bool {
        flags::has_widened(self.kind, value, flag)
    }
}

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod descriptor_tests;
