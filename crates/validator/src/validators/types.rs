//! Runtime type validators

crate::predicate! {
    /// `isString`
    pub fn is_string();
    test(input) { input.is_string() }
}

crate::predicate! {
    /// `isArray`
    pub fn is_array();
    test(input) { input.is_array() }
}

crate::predicate! {
    /// `isNumber`: a number that is not `NaN`.
    pub fn is_number();
    test(input) { input.as_f64().is_some_and(|n| !n.is_nan()) }
}

crate::predicate! {
    /// `isInteger`: a number with no fractional part.
    pub fn is_integer();
    test(input) { input.as_f64().is_some_and(|n| n.fract() == 0.0) }
}

crate::predicate! {
    /// `isBoolean`
    pub fn is_boolean();
    test(input) { input.is_boolean() }
}

crate::predicate! {
    /// `isFunction`: data values are never callable, so this never holds.
    ///
    /// Registered predicates are callable by construction; see
    /// [`ValidatorDefinition`](crate::ValidatorDefinition).
    pub fn is_function();
    test(_input) { false }
}
