//! XML-набор выписок: <BankStatements><BankStatement>...</BankStatement></BankStatements>

use crate::{
    error::{FingenError, Result},
    model::{Currency, Statement, Transaction},
    traits::{ReadFormat, WriteFormat},
};
use chrono::{NaiveDate, NaiveDateTime};
use quick_xml::{
    events::{BytesDecl, BytesStart, BytesText, Event},
    Reader, Writer,
};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Дата операции в комбинированной форме ISO-8601 (полночь, точность до дня).
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct Xml;

/* ------------------------------- WRITE ---------------------------------- */

impl WriteFormat for Xml {
    fn write<W: Write>(mut w: W, statements: &[Statement]) -> Result<()> {
        let mut wr = Writer::new_with_indent(&mut w, b' ', 2);

        wr.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml)?;

        wr.write_event(Event::Start(BytesStart::new("BankStatements")))
            .map_err(xml)?;

        for st in statements {
            write_statement(&mut wr, st).map_err(xml)?;
        }

        wr.write_event(Event::End(BytesStart::new("BankStatements").to_end()))
            .map_err(xml)?;
        Ok(())
    }
}

fn write_statement<W: Write>(
    wr: &mut Writer<W>,
    st: &Statement,
) -> std::result::Result<(), quick_xml::Error> {
    wr.write_event(Event::Start(BytesStart::new("BankStatement")))?;

    write_leaf(wr, "Name", &st.name)?;
    write_leaf(wr, "Address", &st.address)?;
    write_leaf(wr, "AccountNumber", &st.account_number)?;

    wr.write_event(Event::Start(BytesStart::new("Transactions")))?;
    for tx in &st.transactions {
        write_transaction(wr, tx)?;
    }
    wr.write_event(Event::End(BytesStart::new("Transactions").to_end()))?;

    wr.write_event(Event::End(BytesStart::new("BankStatement").to_end()))?;
    Ok(())
}

fn write_transaction<W: Write>(
    wr: &mut Writer<W>,
    tx: &Transaction,
) -> std::result::Result<(), quick_xml::Error> {
    wr.write_event(Event::Start(BytesStart::new("Transaction")))?;

    write_leaf(wr, "Date", &tx.date.format(DATE_FORMAT).to_string())?;
    write_leaf(wr, "Description", &tx.description)?;
    write_leaf(wr, "Amount", &tx.amount.to_string())?;
    write_leaf(wr, "Currency", tx.currency.as_str())?;

    wr.write_event(Event::End(BytesStart::new("Transaction").to_end()))?;
    Ok(())
}

fn write_leaf<W: Write>(
    wr: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> std::result::Result<(), quick_xml::Error> {
    wr.write_event(Event::Start(BytesStart::new(tag)))?;
    wr.write_event(Event::Text(BytesText::new(text)))?;
    wr.write_event(Event::End(BytesStart::new(tag).to_end()))?;
    Ok(())
}

fn xml<E: std::fmt::Display>(e: E) -> FingenError {
    FingenError::Xml(e.to_string())
}

fn parse_currency(s: &str) -> Result<Currency> {
    match s {
        "HUF" => Ok(Currency::Huf),
        "EUR" => Ok(Currency::Eur),
        _ => Err(FingenError::Parse(format!("currency {s}"))),
    }
}

/* ------------------------------- READ ----------------------------------- */

impl ReadFormat for Xml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Statement>> {
        let mut reader = Reader::from_reader(r);
        reader.trim_text(true);

        let mut statements: Vec<Statement> = Vec::new();

        let mut buf = Vec::new();
        let mut text_buf = String::new();

        // «флаги» текущего положения курсора
        let mut in_name = false;
        let mut in_address = false;
        let mut in_account = false;
        let mut in_date = false;
        let mut in_description = false;
        let mut in_amount = false;
        let mut in_currency = false;

        let mut pending_st: Option<Statement> = None;
        let mut pending_tx: Option<Transaction> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"Name" => in_name = true,
                    b"Address" => in_address = true,
                    b"AccountNumber" => in_account = true,
                    b"Date" => in_date = true,
                    b"Description" => in_description = true,
                    b"Amount" => in_amount = true,
                    b"Currency" => in_currency = true,
                    b"BankStatement" => {
                        pending_st = Some(Statement {
                            name: String::new(),
                            address: String::new(),
                            account_number: String::new(),
                            transactions: Vec::new(),
                        });
                    }
                    b"Transaction" => {
                        let date = NaiveDate::from_ymd_opt(1970, 1, 1)
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                            .ok_or_else(|| {
                                FingenError::Parse("invalid default date 1970-01-01".into())
                            })?;
                        pending_tx = Some(Transaction {
                            date,
                            description: String::new(),
                            amount: Decimal::ZERO,
                            currency: Currency::Huf,
                        });
                    }
                    _ => {}
                },
                Ok(Event::Text(t)) => {
                    text_buf.clear();
                    text_buf.push_str(
                        &t.unescape()
                            .map_err(|e| FingenError::Xml(e.to_string()))?
                            .to_string(),
                    );

                    if in_name {
                        if let Some(ref mut st) = pending_st {
                            st.name = text_buf.clone();
                        }
                    } else if in_address {
                        if let Some(ref mut st) = pending_st {
                            st.address = text_buf.clone();
                        }
                    } else if in_account {
                        if let Some(ref mut st) = pending_st {
                            st.account_number = text_buf.clone();
                        }
                    } else if in_date {
                        if let Some(ref mut tx) = pending_tx {
                            tx.date = NaiveDateTime::parse_from_str(&text_buf, DATE_FORMAT)
                                .map_err(|e| FingenError::Parse(format!("{e}")))?;
                        }
                    } else if in_description {
                        if let Some(ref mut tx) = pending_tx {
                            tx.description = text_buf.clone();
                        }
                    } else if in_amount {
                        if let Some(ref mut tx) = pending_tx {
                            tx.amount = Decimal::from_str_exact(&text_buf)
                                .or_else(|_| text_buf.parse())
                                .map_err(|e| FingenError::Parse(format!("amount: {e}")))?;
                        }
                    } else if in_currency {
                        if let Some(ref mut tx) = pending_tx {
                            tx.currency = parse_currency(&text_buf)?;
                        }
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"Name" => in_name = false,
                    b"Address" => in_address = false,
                    b"AccountNumber" => in_account = false,
                    b"Date" => in_date = false,
                    b"Description" => in_description = false,
                    b"Amount" => in_amount = false,
                    b"Currency" => in_currency = false,
                    b"Transaction" => {
                        if let Some(tx) = pending_tx.take() {
                            if let Some(ref mut st) = pending_st {
                                st.transactions.push(tx);
                            }
                        }
                    }
                    b"BankStatement" => {
                        if let Some(st) = pending_st.take() {
                            statements.push(st);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(FingenError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Ok(statements)
    }
}
