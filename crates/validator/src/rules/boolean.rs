//! Boolean rule

crate::rule! {
    /// Accepts JSON booleans and the integers `0` and `1`.
    pub Boolean as "boolean";
    message "This value should be of type {{ type }}." with { "type" => "boolean" };
    rule(value) { value.is_boolean() || matches!(value.as_i64(), Some(0 | 1)) }
    fn boolean();
}
