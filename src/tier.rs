use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    None,
    Low,
    Medium,
    High,
}

pub fn classify(count: i64) -> Tier {
    match count {
        i64::MIN..=0 => Tier::None,
        1..=2 => Tier::Low,
        3..=5 => Tier::Medium,
        _ => Tier::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(classify(0), Tier::None);
        assert_eq!(classify(1), Tier::Low);
        assert_eq!(classify(2), Tier::Low);
        assert_eq!(classify(3), Tier::Medium);
        assert_eq!(classify(5), Tier::Medium);
        assert_eq!(classify(6), Tier::High);
        assert_eq!(classify(10_000), Tier::High);
    }

    #[test]
    fn negative_counts_are_none() {
        assert_eq!(classify(-1), Tier::None);
        assert_eq!(classify(i64::MIN), Tier::None);
    }

    #[test]
    fn monotonic() {
        for low in -5..40 {
            for high in low + 1..41 {
                assert!(classify(low) <= classify(high), "{low} vs {high}");
            }
        }
    }
}
