use chrono::Utc;

/// Serial number for an outgoing cloud message: current Unix time in
/// milliseconds, as a decimal string.
pub fn message_sn() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sn_is_millisecond_timestamp() {
        let sn = message_sn();
        let millis: i64 = sn.parse().expect("sn should be a decimal number");
        // 2020-01-01 in milliseconds; anything earlier means we lost precision
        assert!(millis > 1_577_836_800_000);
    }

    #[test]
    fn test_message_sn_does_not_go_backwards() {
        let first: i64 = message_sn().parse().unwrap();
        let second: i64 = message_sn().parse().unwrap();
        assert!(second >= first);
    }
}
