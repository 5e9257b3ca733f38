use fingenlib::{
    formats::csv::Csv,
    sampler::Sampler,
    traits::{ReadFormat, WriteFormat},
};
use std::io::Cursor;

#[test]
fn csv_roundtrip() {
    let input = "name,address,account_number,date,description,amount,currency\n\
Nagy János,\"Budapest, Váci utca 12.\",HU123456789012345678901234,2025-03-15T00:00:00,Fizetés,1250.00,EUR\n";
    let statements = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].account_number, "HU123456789012345678901234");
    assert_eq!(statements[0].transactions.len(), 1);

    let mut out = Vec::new();
    Csv::write(&mut out, &statements).expect("write csv");
    assert!(!out.is_empty());
}

#[test]
fn sampled_dataset_groups_by_account() {
    let mut sampler = Sampler::with_seed(11);
    let statements = sampler.sample_dataset(4);

    let mut out = Vec::new();
    Csv::write(&mut out, &statements).expect("write csv");
    let parsed = Csv::read(Cursor::new(out)).expect("read csv");

    assert_eq!(parsed, statements);
}
