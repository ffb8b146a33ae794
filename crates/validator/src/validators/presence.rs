//! Presence validators

use crate::foundation::coerce;

crate::predicate! {
    /// `isDefined`: the input is neither `null` nor the empty string.
    ///
    /// `0` and `false` count as defined.
    pub fn is_defined();
    test(input) { coerce::is_present(input) }
}
