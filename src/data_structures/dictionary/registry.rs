// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Handle-based access to dictionaries.
//!
//! Callers that cannot hold a dictionary by value (foreign bindings, request
//! handlers sharing state) go through a [`DictionaryRegistry`] and refer to
//! dictionaries by opaque [`DictionaryHandle`]s. Handles that were disposed or
//! that belong to a different registry are rejected with
//! [`DictionaryError::InvalidHandle`] instead of touching freed state.
//!
//! Each dictionary sits in its own `DashMap` entry. An insert holds that
//! entry's write guard for its whole duration, so it never overlaps a query on
//! the same dictionary; queries only take read guards and may run
//! concurrently.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::{
    AnyDictionary, DictionaryError, DictionaryKind, DictionaryOptions, DictionaryResult,
    SubstringDictionary, SubstringMatch,
};

/// Source of registry identities, so handles from one registry are never
/// accepted by another.
static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque reference to a dictionary owned by a [`DictionaryRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DictionaryHandle {
    registry: u64,
    id: u64,
}

impl DictionaryHandle {
    /// Numeric identifier of the dictionary within its registry.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for DictionaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.registry, self.id)
    }
}

/// Owner of a set of dictionaries addressed by handle.
pub struct DictionaryRegistry {
    /// Identity stamped into every handle this registry issues
    registry_id: u64,

    /// Live dictionaries by id
    dictionaries: DashMap<u64, AnyDictionary>,

    /// Next dictionary id to hand out
    next_id: AtomicU64,

    /// Options applied to every dictionary created here
    options: DictionaryOptions,
}

impl DictionaryRegistry {
    /// Creates an empty registry with default dictionary options.
    pub fn new() -> Self {
        Self::with_options(DictionaryOptions::default())
    }

    /// Creates an empty registry whose dictionaries use `options`.
    pub fn with_options(options: DictionaryOptions) -> Self {
        Self {
            registry_id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            dictionaries: DashMap::new(),
            next_id: AtomicU64::new(1),
            options,
        }
    }

    /// Creates a new empty dictionary and returns its handle.
    pub fn create(&self, kind: DictionaryKind) -> DictionaryHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.dictionaries
            .insert(id, AnyDictionary::new(kind, self.options.clone()));
        tracing::debug!(registry = self.registry_id, id, %kind, "dictionary created");
        DictionaryHandle {
            registry: self.registry_id,
            id,
        }
    }

    /// Inserts `pattern` into the dictionary behind `handle`.
    pub fn insert(&self, handle: DictionaryHandle, pattern: &[u8]) -> DictionaryResult<bool> {
        self.check_owner(handle)?;
        let mut entry = self
            .dictionaries
            .get_mut(&handle.id)
            .ok_or(DictionaryError::InvalidHandle(handle.id))?;
        entry.value_mut().insert(pattern)
    }

    /// Returns whether any pattern of the dictionary occurs in `text`.
    pub fn contains_substring(&self, handle: DictionaryHandle, text: &[u8]) -> DictionaryResult<bool> {
        self.with_dictionary(handle, |dict| dict.contains_substring(text))?
    }

    /// Returns the first pattern occurrence in `text`, if any.
    pub fn find_first(
        &self,
        handle: DictionaryHandle,
        text: &[u8],
    ) -> DictionaryResult<Option<SubstringMatch>> {
        self.with_dictionary(handle, |dict| dict.find_first(text))?
    }

    /// Approximate node storage of the dictionary in bytes.
    pub fn memory_footprint(&self, handle: DictionaryHandle) -> DictionaryResult<usize> {
        self.with_dictionary(handle, |dict| dict.memory_footprint())
    }

    /// Removes the dictionary, releases all of its nodes and returns how many
    /// were released. The handle is invalid afterwards.
    pub fn dispose(&self, handle: DictionaryHandle) -> DictionaryResult<usize> {
        self.check_owner(handle)?;
        let (_, dict) = self
            .dictionaries
            .remove(&handle.id)
            .ok_or(DictionaryError::InvalidHandle(handle.id))?;
        Ok(dict.dispose())
    }

    /// Number of live dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    /// Returns `true` if the registry holds no dictionaries.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    fn with_dictionary<T>(
        &self,
        handle: DictionaryHandle,
        f: impl FnOnce(&AnyDictionary) -> T,
    ) -> DictionaryResult<T> {
        self.check_owner(handle)?;
        let entry = self
            .dictionaries
            .get(&handle.id)
            .ok_or(DictionaryError::InvalidHandle(handle.id))?;
        Ok(f(entry.value()))
    }

    fn check_owner(&self, handle: DictionaryHandle) -> DictionaryResult<()> {
        if handle.registry == self.registry_id {
            Ok(())
        } else {
            Err(DictionaryError::InvalidHandle(handle.id))
        }
    }
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DictionaryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryRegistry")
            .field("registry_id", &self.registry_id)
            .field("dictionaries", &self.dictionaries.len())
            .field("options", &self.options)
            .finish()
    }
}
