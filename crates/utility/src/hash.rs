/// 32 bit polynomial string hash over UTF-16 code units
/// (`h = 31 * h + unit`, wrapping on overflow).
///
/// The result only depends on the text, so it is stable across processes and
/// platforms, unlike `std::hash::DefaultHasher`.
pub fn stable_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}
