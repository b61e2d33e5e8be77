use futures_util::TryStreamExt;
use genai_catalog::Client;

#[tokio::main]
async fn main() -> genai_catalog::Result<()> {
    let client = Client::from_env()?;
    let mut models = client.models().stream();
    while let Some(model) = models.try_next().await? {
        let name = model.name.as_deref().unwrap_or("<unnamed>");
        let methods = model
            .supported_generation_methods
            .as_deref()
            .unwrap_or_default()
            .join(", ");
        println!("{name}: {methods}");
    }
    Ok(())
}
