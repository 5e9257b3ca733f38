use fingenlib::{formats::xml::Xml, sampler::Sampler, traits::WriteFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: генерируем две выписки и пишем XML в stdout
    let mut sampler = Sampler::new();
    let statements = sampler.sample_dataset(2);
    Xml::write(std::io::stdout(), &statements)?;
    Ok(())
}
