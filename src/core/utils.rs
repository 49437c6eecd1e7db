use rand::Rng;
use uuid::Uuid;

/// Fresh idempotency reference for a request envelope
pub fn generate_reference() -> String {
    Uuid::new_v4().to_string()
}

/// Random number with exactly `length` digits, handy for tracking references.
///
/// `length` is clamped to `1..=19` so the result always fits in a `u64`.
pub fn generate_number(length: u32) -> u64 {
    let length = length.clamp(1, 19);
    let low = if length == 1 { 0 } else { 10u64.pow(length - 1) };
    let high = 10u64.pow(length) - 1;
    rand::thread_rng().gen_range(low..=high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_are_unique() {
        let a = generate_reference();
        let b = generate_reference();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_generate_number_length() {
        for length in [1, 6, 10, 19] {
            let n = generate_number(length);
            assert_eq!(n.to_string().len(), length as usize);
        }
    }
}
