/// Builds `validator::ValidationErrors` for checks that happen outside of
/// derived payload validation, e.g. uniqueness pre-checks in services.
///
/// ```ignore
/// validation_errors!({"name": ["exists" => "Industry with this name already exists"]});
/// ```
#[macro_export]
macro_rules! validation_errors {
    ({$($field:tt: [$($code:tt => $message:tt),*]),*}) => {{
        let mut errors = ::validator::ValidationErrors::new();
        $($(
            let error = ::validator::ValidationError {
                code: ::std::borrow::Cow::from($code),
                message: Some(::std::borrow::Cow::from($message)),
                params: ::std::collections::HashMap::new(),
            };
            errors.add($field, error);
        )*)*
        errors
    }};
}
