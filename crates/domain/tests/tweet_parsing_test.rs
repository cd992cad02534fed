use chrono::NaiveDate;
use tweetgram_domain::Tweet;

#[test]
fn test_parses_twitter_timestamp_format() {
    let created_at = Tweet::parse_created_at("Fri Mar 09 20:55:23 +0000 2018").unwrap();
    let tweet = Tweet::new(971_852_307_051_679_744, created_at);

    assert_eq!(
        tweet.local_date(),
        NaiveDate::from_ymd_opt(2018, 3, 9).unwrap()
    );
    assert_eq!(tweet.local_hour(), 20);
}

#[test]
fn test_local_hour_respects_embedded_offset() {
    // 01:30 at +05:30 is 20:00 the previous day in UTC; the histogram
    // buckets by the tweet's own offset, so this is hour 1 on Mar 10.
    let created_at = Tweet::parse_created_at("Sat Mar 10 01:30:00 +0530 2018").unwrap();
    let tweet = Tweet::new(1, created_at);

    assert_eq!(
        tweet.local_date(),
        NaiveDate::from_ymd_opt(2018, 3, 10).unwrap()
    );
    assert_eq!(tweet.local_hour(), 1);
}

#[test]
fn test_midnight_buckets_into_hour_zero() {
    let created_at = Tweet::parse_created_at("Fri Mar 09 00:00:01 +0000 2018").unwrap();
    let tweet = Tweet::new(2, created_at);

    assert_eq!(tweet.local_hour(), 0);
}

#[test]
fn test_rejects_iso_timestamp() {
    assert!(Tweet::parse_created_at("2018-03-09T20:55:23Z").is_err());
}

#[test]
fn test_rejects_inconsistent_weekday() {
    // Mar 09 2018 was a Friday
    assert!(Tweet::parse_created_at("Mon Mar 09 20:55:23 +0000 2018").is_err());
}
