//! Плоский CSV: заголовки:
//! name,address,account_number,date,description,amount,currency

use crate::{
    error::{FingenError, Result},
    model::{Currency, Statement, Transaction},
};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(serde::Deserialize)]
struct CsvRow {
    name: String,
    address: String,
    account_number: String,
    date: String,
    description: String,
    amount: String,
    currency: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    name: &'a str,
    address: &'a str,
    account_number: &'a str,
    date: String,
    description: &'a str,
    amount: String,
    currency: &'a str,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Statement>> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut statements: Vec<Statement> = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;

            let currency = match row.currency.as_str() {
                "HUF" => Currency::Huf,
                "EUR" => Currency::Eur,
                other => return Err(FingenError::Parse(format!("unknown currency: {other}"))),
            };

            let tx = Transaction {
                date: NaiveDateTime::parse_from_str(&row.date, DATE_FORMAT)
                    .map_err(|e| FingenError::Parse(format!("date: {e}")))?,
                description: row.description,
                amount: row
                    .amount
                    .parse::<Decimal>()
                    .map_err(|e| FingenError::Parse(format!("amount: {e}")))?,
                currency,
            };

            // подряд идущие строки с одним account_number — одна выписка
            match statements.last_mut() {
                Some(st) if st.account_number == row.account_number => st.transactions.push(tx),
                _ => statements.push(Statement {
                    name: row.name,
                    address: row.address,
                    account_number: row.account_number,
                    transactions: vec![tx],
                }),
            }
        }

        Ok(statements)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, statements: &[Statement]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for st in statements {
            for tx in &st.transactions {
                let out = CsvOutRow {
                    name: &st.name,
                    address: &st.address,
                    account_number: &st.account_number,
                    date: tx.date.format(DATE_FORMAT).to_string(),
                    description: &tx.description,
                    amount: tx.amount.to_string(),
                    currency: tx.currency.as_str(),
                };
                wrt.serialize(out)?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
