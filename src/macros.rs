#[macro_export]
macro_rules! doc {
    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::PropMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::PropMap::new();
        $(
            object.insert($key.to_string(), $crate::doc!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression with a Value conversion
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
