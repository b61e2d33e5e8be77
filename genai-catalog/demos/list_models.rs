use genai_catalog::Client;

#[tokio::main]
async fn main() -> genai_catalog::Result<()> {
    let client = Client::from_env()?;
    let models = client.models().all().await?;
    let generative: Vec<_> = models
        .iter()
        .filter(|model| model.supports_generate_content())
        .collect();
    println!(
        "{} of {} models support generateContent:",
        generative.len(),
        models.len()
    );
    for model in generative {
        let name = model.name.as_deref().unwrap_or("<unnamed>");
        match (&model.display_name, model.input_token_limit) {
            (Some(display), Some(limit)) => println!("- {name} ({display}, {limit} input tokens)"),
            (Some(display), None) => println!("- {name} ({display})"),
            _ => println!("- {name}"),
        }
    }
    Ok(())
}
