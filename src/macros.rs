#[macro_export]
macro_rules! tree {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::tree!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::FieldMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FieldMap::new();
        $(
            object.insert($key.to_string(), $crate::tree!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression with a From conversion
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
