use heapless::String as HeaplessString;

/// Converts `value` into a fixed-capacity string.
///
/// Capacity is counted in bytes. On overflow the field name is pushed onto
/// `invalid` so that callers can report every offending field at once.
pub fn bounded_string<const N: usize>(
    field: &str,
    value: &str,
    invalid: &mut Vec<String>,
) -> Option<HeaplessString<N>> {
    match HeaplessString::try_from(value) {
        Ok(bounded) => Some(bounded),
        Err(_) => {
            invalid.push(field.to_string());
            None
        }
    }
}
