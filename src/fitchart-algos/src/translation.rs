/// Rebases epoch-second timestamps onto the first one seen.
///
/// Chart coordinates are `f32`, whose 24 bit mantissa cannot hold a raw
/// epoch timestamp exactly. Shortened values stay small enough to survive
/// the conversion and can be mapped back for labelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampTranslation {
    offset: Option<i32>,
}

impl TimestampTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// The first call fixes the offset and returns 0.
    ///
    /// Any two `i32` timestamps are less than `2^32` apart, so the result
    /// never wraps.
    pub fn shorten(&mut self, timestamp: i32) -> i64 {
        match self.offset {
            Some(offset) => i64::from(timestamp) - i64::from(offset),
            None => {
                self.offset = Some(timestamp);
                0
            }
        }
    }

    pub fn to_original(&self, value: i64) -> i64 {
        match self.offset {
            Some(offset) => value.saturating_add(i64::from(offset)),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_timestamp_becomes_zero() {
        let mut translation = TimestampTranslation::new();
        assert_eq!(translation.shorten(1_700_000_000), 0);
        assert_eq!(translation.shorten(1_700_000_060), 60);
        assert_eq!(translation.shorten(1_699_999_940), -60);
        assert_eq!(translation.offset(), Some(1_700_000_000));
    }

    #[test]
    fn to_original_without_offset_is_identity() {
        let translation = TimestampTranslation::new();
        assert_eq!(translation.to_original(1234), 1234);
    }

    #[test]
    fn to_original_reverses_shorten() {
        let mut translation = TimestampTranslation::new();
        translation.shorten(1_700_000_000);
        let short = translation.shorten(1_700_003_600);
        assert_eq!(translation.to_original(short), 1_700_003_600);
    }

    #[test]
    fn shortened_values_fit_float_precision() {
        let mut translation = TimestampTranslation::new();
        let base = 1_700_000_001;
        translation.shorten(base);
        // A whole day of minutes stays exact as f32
        for minute in 0..1440 {
            let short = translation.shorten(base + minute * 60);
            assert_eq!(short as f32 as i64, short);
        }
    }

    #[test]
    fn extremes_keep_their_order() {
        let mut translation = TimestampTranslation::new();
        assert_eq!(translation.shorten(i32::MIN), 0);
        assert_eq!(translation.shorten(i32::MAX), u32::MAX as i64);
        assert_eq!(translation.to_original(u32::MAX as i64), i64::from(i32::MAX));

        let mut translation = TimestampTranslation::new();
        translation.shorten(-2_000_000_000);
        assert_eq!(translation.shorten(2_000_000_000), 4_000_000_000);

        let mut translation = TimestampTranslation::new();
        translation.shorten(i32::MAX);
        assert_eq!(translation.shorten(i32::MIN), -(u32::MAX as i64));
    }
}
