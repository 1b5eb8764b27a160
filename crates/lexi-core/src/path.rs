use serde_json::Value;

/// One step of a navigation path into an untyped JSON tree.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

/// Walk `root` along `steps`, stopping with `None` the moment a step does
/// not apply: missing key, out-of-range index, or a value of the wrong
/// shape. Never fails.
pub fn walk<'a>(root: &'a Value, steps: &[Step<'_>]) -> Option<&'a Value> {
    let mut value = root;
    for step in steps {
        value = match *step {
            Step::Key(key) => value.as_object()?.get(key)?,
            Step::Index(index) => value.as_array()?.get(index)?,
        };
    }
    Some(value)
}

/// String at the end of the path, or `default` when any step is absent or
/// the final value is not a string.
pub fn get_str(root: &Value, steps: &[Step<'_>], default: &str) -> String {
    walk(root, steps)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
