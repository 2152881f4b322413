use std::fs;
use std::path::Path;

use anyhow::Result;

use tango::WordStorage;

pub fn run_export(storage: &WordStorage, path: Option<&Path>) -> Result<()> {
    let json = storage.export_json()?;

    match path {
        Some(path) => {
            fs::write(path, &json)?;
            println!("Exported to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn run_import(storage: &WordStorage, path: &Path) -> Result<()> {
    let json = fs::read_to_string(path)?;
    let count = storage.import_json(&json)?;
    println!("Imported {} words from {}", count, path.display());
    Ok(())
}
