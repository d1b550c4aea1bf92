/// Build a [`Description`](crate::Description) from `key => value` pairs.
///
/// Values are anything that converts into a [`Value`](crate::Value): strings and numbers become
/// attributes, nested `desc!` calls become child elements, arrays become groups of siblings, and
/// `()` becomes a text node named after its key.
///
/// ```rust
/// use arbor_core::prelude::*;
///
/// let icon = desc! {
///     "viewBox" => "0 0 100 100",
///     "line" => [
///         desc! { "x1" => 20, "y1" => 20, "x2" => 80, "y2" => 20 },
///         desc! { "x1" => 20, "y1" => 80, "x2" => 80, "y2" => 80 },
///     ],
///     "text" => desc! { "?" => () },
/// };
///
/// assert_eq!(icon.len(), 3);
/// assert_eq!(icon.get("line").and_then(Value::as_list).map(<[_]>::len), Some(2));
/// ```
#[macro_export]
macro_rules! desc {
    () => {
        $crate::Description::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut description = $crate::Description::new();
        $(
            description.insert($key, $value);
        )+
        description
    }};
}
