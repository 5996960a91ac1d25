//! Integration tests for the FX rate system
//!
//! Loads rates through the sources and queries them the way the CLI does.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use rusty_exchange_rate::currency::Currency;
use rusty_exchange_rate::data::fx::{
    convert_amounts, RateRecord, RateResolver, RateTable, SharedRateTable,
};
use rusty_exchange_rate::data::sources::{
    open_source, EcbCsvSource, EcbXmlSource, InMemoryRateSource, RateSource,
};
use rusty_exchange_rate::error::ExchangeRateError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_path() -> PathBuf {
    fixture("eurofxref-hist-sample.csv")
}

fn xml_fixture_path() -> PathBuf {
    fixture("eurofxref-hist-90d-sample.xml")
}

fn fixture_table() -> RateTable {
    let records = EcbCsvSource::new(fixture_path()).load().unwrap();
    RateTable::build(records).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_matches_published_rates_from_eur() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);
    let d = date(2018, 4, 17);

    for (currency, expected) in [
        (Currency::EUR, 1.0),
        (Currency::SEK, 10.3913),
        (Currency::NOK, 9.598),
    ] {
        let rate = resolver.convert(d, Currency::EUR, currency).unwrap();
        assert_abs_diff_eq!(rate, expected, epsilon = 0.0001);
    }
}

#[test]
fn test_same_currency_is_exactly_one() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);

    assert_eq!(
        resolver.convert(date(2018, 4, 17), Currency::NOK, Currency::NOK).unwrap(),
        1.0
    );
}

#[test]
fn test_weekend_uses_friday_rates() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);

    let saturday = date(2018, 4, 14);
    let sunday = date(2018, 4, 15);
    assert_eq!(saturday.weekday(), Weekday::Sat);

    for d in [saturday, sunday] {
        let quote = resolver.quote(d, Currency::EUR, Currency::SEK).unwrap();
        assert_eq!(quote.effective, date(2018, 4, 13));
        assert_abs_diff_eq!(quote.rate, 10.3195, epsilon = 1e-9);
    }
}

#[test]
fn test_unpublished_rate_in_file_is_missing() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);
    let d = date(2018, 4, 12);

    assert!(matches!(
        resolver.convert(d, Currency::EUR, Currency::NOK),
        Err(ExchangeRateError::MissingExchangeRate { currency: Currency::NOK, .. })
    ));
    assert!(resolver.convert(d, Currency::EUR, Currency::SEK).is_ok());
}

#[test]
fn test_unsupported_columns_are_not_loaded() {
    let table = fixture_table();

    let currencies = table.currencies_on(date(2018, 4, 17));
    assert_eq!(
        currencies,
        vec![
            Currency::EUR,
            Currency::SEK,
            Currency::NOK,
            Currency::DKK,
            Currency::USD,
            Currency::GBP,
            Currency::CHF,
            Currency::JPY,
        ]
    );
}

#[test]
fn test_missing_exchange_rate_for_today() {
    let today = Utc::now().date_naive();
    let table = RateTable::build(vec![
        RateRecord::anchored(today, Currency::EUR).with_rate(Currency::SEK, 10.3913),
    ])
    .unwrap();
    let resolver = RateResolver::new(&table);

    assert!(matches!(
        resolver.convert(today, Currency::EUR, Currency::NOK),
        Err(ExchangeRateError::MissingExchangeRate { currency: Currency::NOK, .. })
    ));
    assert!(matches!(
        resolver.convert(today, Currency::NOK, Currency::EUR),
        Err(ExchangeRateError::MissingExchangeRate { currency: Currency::NOK, .. })
    ));

    assert!(resolver.convert(today, Currency::EUR, Currency::SEK).is_ok());
    assert!(resolver.convert(today, Currency::SEK, Currency::EUR).is_ok());
}

#[test]
fn test_unknown_currency_in_either_position() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);

    for (base, counter) in [("NOK", "UNKNOWN"), ("UNKNOWN", "NOK")] {
        match resolver.convert_codes("2018-04-17", base, counter) {
            Err(ExchangeRateError::UnknownCurrency(code)) => assert_eq!(code, "UNKNOWN"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    assert!(resolver.convert_codes("2018-04-17", "EUR", "NOK").is_ok());
}

#[test]
fn test_invalid_date_string() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);

    assert!(matches!(
        resolver.convert_codes("Wrong Type", "EUR", "NOK"),
        Err(ExchangeRateError::InvalidDate(_))
    ));
}

/// Every weekday over the 90 days ending on `last`, like the ECB 90-day feed
fn ninety_day_feed(last: NaiveDate) -> Vec<RateRecord> {
    (0..90u64)
        .map(|offset| last - Days::new(offset))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|d| {
            RateRecord::anchored(d, Currency::EUR)
                .with_rate(Currency::SEK, 10.3913)
                .with_rate(Currency::NOK, 9.598)
        })
        .collect()
}

#[test]
fn test_ninety_day_window() {
    let last = date(2018, 4, 17);
    let table = RateTable::build(ninety_day_feed(last)).unwrap();
    let resolver = RateResolver::new(&table);

    let too_old = last - Days::new(90);
    assert!(matches!(
        resolver.convert(too_old, Currency::EUR, Currency::NOK),
        Err(ExchangeRateError::MissingDate(d)) if d == too_old
    ));

    let oldest = last - Days::new(89);
    assert!(resolver.convert(oldest, Currency::EUR, Currency::NOK).is_ok());
}

#[test]
fn test_convert_amounts_on_fixture() {
    let table = fixture_table();
    let resolver = RateResolver::new(&table);

    let eur = convert_amounts(
        &resolver,
        date(2018, 4, 17),
        &[(103.913, Currency::SEK), (95.98, Currency::NOK)],
        Currency::EUR,
    )
    .unwrap();

    assert_abs_diff_eq!(eur[0], 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(eur[1], 10.0, epsilon = 1e-9);
}

#[test]
fn test_json_source_matches_csv() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"date": "2018-04-17", "rates": {{"SEK": 10.3913, "NOK": 9.598}}}}]"#
    )
    .unwrap();

    let source = open_source(file.path());
    assert_eq!(source.name(), "json");

    let table = RateTable::build(source.load().unwrap()).unwrap();
    let rate = RateResolver::new(&table)
        .convert(date(2018, 4, 17), Currency::SEK, Currency::NOK)
        .unwrap();
    assert_eq!(rate, 1.0 / 10.3913 * 9.598);
}

#[test]
fn test_shared_table_reloads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,SEK,NOK,").unwrap();
    writeln!(file, "2018-04-16,10.3673,9.6045,").unwrap();
    file.flush().unwrap();

    let source = EcbCsvSource::new(file.path());
    let shared = SharedRateTable::load(&source, Currency::EUR).unwrap();
    assert_eq!(shared.snapshot().last_date(), Some(date(2018, 4, 16)));

    writeln!(file, "2018-04-17,10.3913,9.5980,").unwrap();
    file.flush().unwrap();
    shared.reload(&source).unwrap();

    let table = shared.snapshot();
    assert_eq!(table.len(), 2);
    assert_eq!(table.last_date(), Some(date(2018, 4, 17)));
}

#[test]
fn test_bad_anchor_in_source_fails_build() {
    let source = InMemoryRateSource::new(vec![RateRecord::new(date(2018, 4, 17))
        .with_rate(Currency::EUR, 0.99)
        .with_rate(Currency::SEK, 10.3913)]);

    assert!(matches!(
        RateTable::build(source.load().unwrap()),
        Err(ExchangeRateError::DataIntegrity(_))
    ));
}

#[test]
fn test_xml_feed_matches_csv() {
    let source = open_source(&xml_fixture_path());
    assert_eq!(source.name(), "ecb-xml");

    let xml = RateTable::from_source(source.as_ref(), Currency::EUR).unwrap();
    let csv = fixture_table();

    assert_eq!(xml.dates().collect::<Vec<_>>(), csv.dates().collect::<Vec<_>>());
    for d in csv.dates() {
        assert_eq!(xml.record(d), csv.record(d), "rates differ on {d}");
    }
}

#[test]
fn test_xml_feed_weekend_and_missing_nok() {
    let table = RateTable::build(EcbXmlSource::new(xml_fixture_path()).load().unwrap()).unwrap();
    let resolver = RateResolver::new(&table);

    let quote = resolver.quote(date(2018, 4, 15), Currency::EUR, Currency::SEK).unwrap();
    assert_eq!(quote.effective, date(2018, 4, 13));
    assert_abs_diff_eq!(quote.rate, 10.3195, epsilon = 1e-9);

    assert!(matches!(
        resolver.convert(date(2018, 4, 12), Currency::NOK, Currency::EUR),
        Err(ExchangeRateError::MissingExchangeRate { currency: Currency::NOK, .. })
    ));
}

#[test]
fn test_usd_anchor_rebases_ecb_rates() {
    let source = EcbCsvSource::new(fixture_path());
    let table = RateTable::from_source(&source, Currency::USD).unwrap();
    let resolver = RateResolver::new(&table);
    let d = date(2018, 4, 17);

    assert_eq!(table.anchor(), Currency::USD);
    assert_eq!(table.rate_of(Currency::USD, d).unwrap(), 1.0);
    assert_relative_eq!(
        resolver.convert(d, Currency::USD, Currency::SEK).unwrap(),
        10.3913 / 1.2375,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        resolver.convert(d, Currency::USD, Currency::EUR).unwrap(),
        1.0 / 1.2375,
        epsilon = 1e-9
    );

    // Cross rates do not depend on the anchor
    let euro_table = fixture_table();
    let euro = RateResolver::new(&euro_table);
    assert_relative_eq!(
        resolver.convert(d, Currency::SEK, Currency::NOK).unwrap(),
        euro.convert(d, Currency::SEK, Currency::NOK).unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_anchor_absent_from_ecb_data_fails() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Date,SEK,NOK,").unwrap();
    writeln!(file, "2018-04-17,10.3913,9.598,").unwrap();
    file.flush().unwrap();

    let source = open_source(file.path());
    assert!(matches!(
        RateTable::from_source(source.as_ref(), Currency::USD),
        Err(ExchangeRateError::DataIntegrity(_))
    ));
    assert!(matches!(
        SharedRateTable::load(source.as_ref(), Currency::USD),
        Err(ExchangeRateError::DataIntegrity(_))
    ));

    // The euro still resolves against its own data
    let table = RateTable::from_source(source.as_ref(), Currency::EUR).unwrap();
    assert_abs_diff_eq!(
        RateResolver::new(&table)
            .convert(date(2018, 4, 17), Currency::EUR, Currency::SEK)
            .unwrap(),
        10.3913,
        epsilon = 1e-9
    );
}

#[test]
fn test_in_memory_source_with_own_anchor() {
    let d = date(2018, 4, 17);
    let source = InMemoryRateSource::new(vec![RateRecord::anchored(d, Currency::USD)
        .with_rate(Currency::EUR, 0.8)
        .with_rate(Currency::SEK, 8.0)])
    .with_anchor(Currency::USD);

    let table = RateTable::from_source(&source, Currency::EUR).unwrap();
    assert_eq!(table.anchor(), Currency::EUR);
    assert_relative_eq!(table.rate_of(Currency::USD, d).unwrap(), 1.25, epsilon = 1e-12);
    assert_relative_eq!(table.rate_of(Currency::SEK, d).unwrap(), 10.0, epsilon = 1e-12);
}
