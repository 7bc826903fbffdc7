use log::debug;
use std::collections::BTreeMap;

const MAX_KEY_LEN: usize = 150;
const MAX_VALUE_LEN: usize = 8192;

pub trait Sanitize {
    fn sanitize(&mut self);
}

/// Truncates map keys to the schema limit. When a truncated key collides
/// with an existing entry the later entry wins.
fn truncate_long_keys<V>(map: &mut BTreeMap<String, V>) {
    let long_keys: Vec<_> = map
        .keys()
        .filter(|k| k.len() > MAX_KEY_LEN)
        .map(|k| k.to_owned())
        .collect();
    for mut long_key in long_keys {
        let (mut key, value) = map
            .remove_entry(&long_key)
            .expect("value needs to exist. got key by iterating over map");
        key.truncate(MAX_KEY_LEN);
        if map.insert(key, value).is_some() {
            long_key.truncate(MAX_KEY_LEN);
            debug!(
                "Truncated key overrides entry with the same name: {}",
                long_key
            );
        }
    }
}

/// Custom properties: both keys and values are length limited.
impl Sanitize for BTreeMap<String, String> {
    fn sanitize(&mut self) {
        truncate_long_keys(self);
        for value in self.values_mut() {
            value.truncate(MAX_VALUE_LEN);
        }
    }
}

/// Custom measurements: only the keys are length limited.
impl Sanitize for BTreeMap<String, f64> {
    fn sanitize(&mut self) {
        truncate_long_keys(self);
    }
}
