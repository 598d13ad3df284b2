use std::num::ParseIntError;

#[rigor::suite(prefix = "results")]
mod results {
    use super::ParseIntError;
    use rigor::prelude::*;

    #[case]
    fn parses() -> Result<(), ParseIntError> {
        let n: u16 = "512".parse()?;
        check_gt!(n, 256);
        Ok(())
    }

    #[case]
    fn returns_value() -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
        Ok(1)
    }
}

fn main() -> Result<(), rigor::RegistryError> {
    let registry = rigor::TestsRegistry::new();
    results::register(&registry)?;
    assert_eq!(
        registry.names(),
        vec!["results::parses".to_owned(), "results::returns_value".to_owned()]
    );
    registry.run_all();
    Ok(())
}
