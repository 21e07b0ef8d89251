use anyhow::Result;

fn main() -> Result<()> {
    let doc = bankid_mock::api::openapi();
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{json}");
    Ok(())
}
