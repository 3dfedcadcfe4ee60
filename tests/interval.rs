#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use ritual::libs::interval::{parse_interval, IntervalError, IntervalToken, IntervalUnit};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn span(token: &str) -> i64 {
        let range = token.parse::<IntervalToken>().unwrap().range_from(today()).unwrap();
        (range.end - range.begin).num_days()
    }

    #[test]
    fn test_span_matches_unit_factors() {
        for (y, m, w, d) in [(0, 0, 0, 1), (1, 0, 0, 0), (0, 2, 0, 0), (0, 0, 3, 0), (1, 2, 3, 4), (2, 0, 1, 10)] {
            let mut token = String::new();
            for (value, unit) in [(y, 'y'), (m, 'm'), (w, 'w'), (d, 'd')] {
                if value > 0 {
                    token.push_str(&format!("{}{}", value, unit));
                }
            }
            assert_eq!(span(&token), 365 * y + 30 * m + 7 * w + d + 1, "token {}", token);
        }
    }

    #[test]
    fn test_full_token_offsets() {
        let range = "1y2m3w4d".parse::<IntervalToken>().unwrap().range_from(today()).unwrap();
        assert_eq!(range.begin, today() - chrono::Days::new(450));
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    }

    #[test]
    fn test_multi_digit_magnitude() {
        let token: IntervalToken = "45d".parse().unwrap();
        assert_eq!(token.parts(), &[(45, IntervalUnit::Day)]);
        assert_eq!(span("45d"), 46);
    }

    #[test]
    fn test_zero_magnitude_is_a_valid_unit() {
        let range = "0d".parse::<IntervalToken>().unwrap().range_from(today()).unwrap();
        assert_eq!(range.begin, today());
        assert_eq!(range.end_date(), "2024-03-16");
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(parse_interval(""), Err(IntervalError::Empty));
        assert!(matches!(parse_interval("abc"), Err(IntervalError::UnexpectedCharacter { .. })));
        assert!(matches!(
            parse_interval("2w1y"),
            Err(IntervalError::OutOfOrder {
                unit: IntervalUnit::Year,
                previous: IntervalUnit::Week
            })
        ));
        assert!(matches!(parse_interval("1w1w"), Err(IntervalError::OutOfOrder { .. })));
        assert!(matches!(parse_interval("1y 2d"), Err(IntervalError::UnexpectedCharacter { found: ' ', .. })));
        assert!(matches!(parse_interval("3"), Err(IntervalError::MissingUnit { .. })));
        assert!(matches!(parse_interval("d"), Err(IntervalError::MissingMagnitude { .. })));
        assert!(matches!(parse_interval("1D"), Err(IntervalError::UnexpectedCharacter { .. })));
    }

    #[test]
    fn test_parse_interval_uses_local_today() {
        let range = parse_interval("1d").unwrap();
        let today = Local::now().date_naive();
        // Tolerate the test straddling midnight
        assert!(range.end == today.succ_opt().unwrap() || range.end == today);
        assert_eq!((range.end - range.begin).num_days(), 2);
    }

    #[test]
    fn test_query_params() {
        let range = "1w".parse::<IntervalToken>().unwrap().range_from(today()).unwrap();
        let [(begin_key, begin), (end_key, end)] = range.query_params();
        assert_eq!((begin_key, begin.as_str()), ("beginDate", "2024-03-08"));
        assert_eq!((end_key, end.as_str()), ("endDate", "2024-03-16"));
    }

    #[test]
    fn test_error_messages_are_readable() {
        assert_eq!(IntervalError::Empty.to_string(), "interval must name at least one of y, m, w or d");
        let err = "2w1y".parse::<IntervalToken>().unwrap_err();
        assert_eq!(err.to_string(), "unit 'y' cannot follow 'w'; units go in the order y, m, w, d and appear once");
    }
}
