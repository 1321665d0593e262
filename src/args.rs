// src/args.rs

//! Long-option argument maps.
//!
//! An [`Args`] map holds option names (without leading dashes) and their
//! values. Empty values are valid. An option is omitted by removing its key;
//! there is no sentinel for "unset".

use std::collections::BTreeMap;

use serde::Deserialize;

/// Option name -> value mapping that expands into `--name value` pairs.
///
/// Keys are kept sorted, so [`Args::list`] is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Args {
    inner: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Args::insert`].
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Drop an option so it no longer appears in [`Args::list`].
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Flatten into an argument list: every key `k` becomes `--k` followed
    /// immediately by its value. Nothing is quoted or escaped.
    pub fn list(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.inner.len() * 2);
        for (k, v) in &self.inner {
            list.push(format!("--{k}"));
            list.push(v.clone());
        }
        list
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
