use serde::Serialize;
use vitae_core::error::VitaeError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), VitaeError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
