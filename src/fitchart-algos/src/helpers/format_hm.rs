pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Whole minutes as a duration, hours are not wrapped at a day.
impl FormatHM for i64 {
    fn format_hm(&self) -> String {
        let sign = if *self < 0 { "-" } else { "" };
        let minutes = self.unsigned_abs();
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}
