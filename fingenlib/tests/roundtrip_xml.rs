use fingenlib::{
    formats::xml::Xml,
    sampler::Sampler,
    traits::{ReadFormat, WriteFormat},
};
use std::io::Cursor;

#[test]
fn sampled_dataset_roundtrips() {
    let mut sampler = Sampler::with_seed(2024);
    let statements = sampler.sample_dataset(3);

    let mut out = Vec::new();
    Xml::write(&mut out, &statements).expect("write xml");
    let parsed = Xml::read(Cursor::new(out)).expect("read xml");

    assert_eq!(parsed, statements);
}

#[test]
fn single_statement_document_shape() {
    let mut sampler = Sampler::with_seed(5);
    let statements = sampler.sample_dataset(1);

    let mut out = Vec::new();
    Xml::write(&mut out, &statements).expect("write xml");
    let text = String::from_utf8(out).expect("utf8 output");

    assert_eq!(text.matches("<BankStatement>").count(), 1);
    assert_eq!(text.matches("<Transactions>").count(), 1);
    let tx_count = text.matches("<Transaction>").count();
    assert!((5..=15).contains(&tx_count));
}
