use serde_json::Value;

use crate::error::{Error, Result};

/// Walk `path` through a tree of JSON objects and return the value at the end.
///
/// Every step before the last must land on an object that holds the next key.
/// The first key that cannot be resolved is reported in [`Error::MissingKey`],
/// whether it is absent or its parent is a scalar, array or `null`.
/// An empty path yields `map` itself.
pub fn access_nested_map<'a, K>(map: &'a Value, path: &[K]) -> Result<&'a Value>
where
    K: AsRef<str>,
{
    path.iter().try_fold(map, |current, key| {
        let key = key.as_ref();
        current
            .as_object()
            .and_then(|obj| obj.get(key))
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    })
}
