use std::env;
use std::ffi::OsStr;

/// Returns the value of `key` when it is set, valid unicode and not empty.
pub fn non_empty<K: AsRef<OsStr>>(key: K) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Returns the value of `key`, falling back to `default` when unset or empty.
pub fn non_empty_or<K: AsRef<OsStr>>(key: K, default: &str) -> String {
    non_empty(key).unwrap_or_else(|| default.to_string())
}
