//! Process-wide descriptor cache.
//!
//! Building a descriptor walks the member table and fills several hash
//! maps, so it happens once per enum type. The cache is keyed by `TypeId`.
//!
//! Population is idempotent: the descriptor is built outside any shard
//! lock, and if two threads race on the same type the first insert wins
//! and the other result is dropped. Published descriptors never change.

use crate::descriptor::EnumTypeDescriptor;
use crate::reflect::EnumReflect;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;
use std::any::TypeId;
use std::sync::Arc;
use tracing::trace;

static DESCRIPTORS: Lazy<DashMap<TypeId, Arc<EnumTypeDescriptor>, FxBuildHasher>> =
    Lazy::new(|| DashMap::with_hasher(FxBuildHasher));

/// Get the cached descriptor for `E`, building it on first use.
pub fn descriptor_of<E: EnumReflect>() -> Arc<EnumTypeDescriptor> {
    let key = TypeId::of::<E>();
    if let Some(cached) = DESCRIPTORS.get(&key) {
        return Arc::clone(cached.value());
    }

    let built = Arc::new(EnumTypeDescriptor::of::<E>());
    let published = DESCRIPTORS.entry(key).or_insert(built);
    trace!(type_name = E::TYPE_NAME, "published enum descriptor");
    Arc::clone(published.value())
}

/// Number of enum types with a cached descriptor.
pub fn cached_type_count() -> usize {
    DESCRIPTORS.len()
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;
