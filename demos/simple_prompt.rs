//! Send one prompt and print the reply with its token usage.
//!
//! OPENAI_API_KEY=sk-... RUST_LOG=chatgen=debug \
//!   cargo run --example simple_prompt -- "What is Rust?"

use chatgen::{ChatClient, ModelType, TextRequestBuilder};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::init();

    let prompt = std::env::args()
      .nth(1)
      .unwrap_or_else(|| "Say hello".to_string());

    let request = TextRequestBuilder::new()
      .model(ModelType::Gpt4oMini)?
      .temperature(0.7)?
      .system_content("Answer in at most two sentences")?
      .user_content(prompt)?
      .build()?;

    let client = ChatClient::new();
    client.set_api_key(std::env::var("OPENAI_API_KEY")?);

    let response = client.send(&request).await?;
    info!("Reply {} from {}", response.id()?, response.model()?);

    println!("{}", response.content()?);
    println!(
      "tokens: prompt={} completion={} total={}",
      response.prompt_tokens()?,
      response.completion_tokens()?,
      response.total_tokens()?
    );
    Ok(())
}
