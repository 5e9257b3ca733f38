use chrono::{NaiveDate, Timelike};
use fingenlib::model::Currency;
use fingenlib::sampler::Sampler;
use fingenlib::tables;
use rust_decimal::Decimal;

#[test]
fn statement_fields_within_bounds() {
    let mut sampler = Sampler::with_seed(42);
    for _ in 0..50 {
        let st = sampler.sample_statement();

        assert!(tables::NAMES.contains(&st.name.as_str()));
        assert!((5..=15).contains(&st.transactions.len()));

        // "HU" + 24 цифры
        assert_eq!(st.account_number.len(), 26);
        assert!(st.account_number.starts_with("HU"));
        assert!(st.account_number[2..].bytes().all(|b| b.is_ascii_digit()));

        assert!(st.address.contains(", "));
        assert!(st.address.ends_with('.'));
    }
}

#[test]
fn transaction_fields_within_bounds() {
    let mut sampler = Sampler::with_seed(7);
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    for _ in 0..500 {
        let tx = sampler.sample_transaction();

        let day = tx.date.date();
        assert!(day >= start && day <= end);
        assert_eq!(tx.date.time().num_seconds_from_midnight(), 0);

        assert!(tx.amount.scale() <= 2);
        let limit = match tx.currency {
            Currency::Huf => Decimal::new(500_000, 0),
            Currency::Eur => Decimal::new(1_500, 0),
        };
        assert!(tx.amount >= -limit && tx.amount <= limit);

        assert!(tables::TRANSACTION_TYPES.contains(&tx.description.as_str()));
    }
}

#[test]
fn dataset_has_requested_count() {
    let mut sampler = Sampler::with_seed(1);
    assert!(sampler.sample_dataset(0).is_empty());
    assert_eq!(sampler.sample_dataset(8).len(), 8);
}

#[test]
fn seeded_sampler_is_reproducible() {
    let mut a = Sampler::with_seed(99);
    let mut b = Sampler::with_seed(99);
    assert_eq!(a.sample_dataset(3), b.sample_dataset(3));
}
