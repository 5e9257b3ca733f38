//! Генератор случайных выписок — независимые выборки из справочных таблиц.

use crate::model::{Currency, Statement, Transaction};
use crate::tables;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Окно дат: 365 дней начиная с 2025-01-01, с точностью до дня.
const WINDOW_YEAR: i32 = 2025;
const WINDOW_DAYS: i64 = 365;

const COUNTRY_CODE: &str = "HU";
const ACCOUNT_DIGITS: usize = 24;

const TX_MIN: usize = 5;
const TX_MAX: usize = 15;

// границы сумм в сотых долях валюты
const HUF_LIMIT_CENTS: i64 = 50_000_000; // ±500000.00
const EUR_LIMIT_CENTS: i64 = 150_000; // ±1500.00

pub struct Sampler {
    rng: SmallRng,
    window_start: NaiveDateTime,
}

impl Sampler {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Фиксированное зерно — воспроизводимый набор данных.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        let window_start = NaiveDate::from_ymd_opt(WINDOW_YEAR, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);
        Self { rng, window_start }
    }

    pub fn sample_dataset(&mut self, count: usize) -> Vec<Statement> {
        (0..count).map(|_| self.sample_statement()).collect()
    }

    pub fn sample_statement(&mut self) -> Statement {
        let count = self.rng.gen_range(TX_MIN..=TX_MAX);
        let transactions = (0..count).map(|_| self.sample_transaction()).collect();

        Statement {
            name: self.pick(tables::NAMES).to_string(),
            address: self.sample_address(),
            account_number: self.sample_account_number(),
            transactions,
        }
    }

    pub fn sample_transaction(&mut self) -> Transaction {
        let currency = if self.rng.gen_range(0..2) == 0 {
            Currency::Huf
        } else {
            Currency::Eur
        };
        let cents = match currency {
            Currency::Huf => self.rng.gen_range(-HUF_LIMIT_CENTS..=HUF_LIMIT_CENTS),
            Currency::Eur => self.rng.gen_range(-EUR_LIMIT_CENTS..=EUR_LIMIT_CENTS),
        };
        let day = self.rng.gen_range(0..WINDOW_DAYS);

        Transaction {
            date: self.window_start + Duration::days(day),
            description: self.pick(tables::TRANSACTION_TYPES).to_string(),
            amount: Decimal::new(cents, 2),
            currency,
        }
    }

    fn sample_address(&mut self) -> String {
        let city = self.pick(tables::CITIES);
        let street = self.pick(tables::STREETS);
        let house = self.rng.gen_range(1..=100);
        format!("{city}, {street} {house}.")
    }

    /// IBAN-подобный номер без контрольной суммы: "HU" + 24 цифры.
    fn sample_account_number(&mut self) -> String {
        let mut acc = String::with_capacity(COUNTRY_CODE.len() + ACCOUNT_DIGITS);
        acc.push_str(COUNTRY_CODE);
        for _ in 0..ACCOUNT_DIGITS {
            acc.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
        }
        acc
    }

    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        table[self.rng.gen_range(0..table.len())]
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
