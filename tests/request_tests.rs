use chatgen::{MessageRole, ModelType, TextRequestBuilder};
use serde_json::Value;

fn encode(request: &chatgen::TextRequest) -> Value
{   let json = request.to_json().expect("request should encode");
    serde_json::from_str(&json).expect("encoded request is JSON")
}

#[test]
fn test_user_and_system_only() -> chatgen::Result<()>
{   let request = TextRequestBuilder::new()
      .user_content("Hi")?
      .system_content("sys")?
      .build()?;
    let body = encode(&request);

    let object = body.as_object().expect("top level is an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["messages", "model", "n", "temperature"]);

    let messages = body["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "Hi");
    assert_eq!(messages[1]["role"], "system");
    assert_eq!(messages[1]["content"], "sys");
    Ok(())
}

#[test]
fn test_message_order_is_user_system_assistant() -> chatgen::Result<()>
{   // Setter order must not change wire order.
    let request = TextRequestBuilder::new()
      .assistant_content("a")?
      .system_content("s")?
      .user_content("u")?
      .build()?;
    let roles: Vec<MessageRole> = request.messages()
      .into_iter()
      .map(|m| m.role)
      .collect();
    assert_eq!(
      roles,
      vec![MessageRole::User, MessageRole::System, MessageRole::Assistant]
    );

    let body = encode(&request);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][1]["role"], "system");
    assert_eq!(body["messages"][2]["role"], "assistant");
    Ok(())
}

#[test]
fn test_scalar_fields_on_the_wire() -> chatgen::Result<()>
{   let request = TextRequestBuilder::new()
      .model(ModelType::Gpt4o)?
      .temperature(0.5)?
      .n(2)?
      .user_content("Hello")?
      .build()?;
    let body = encode(&request);
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["temperature"].as_f64(), Some(0.5));
    assert_eq!(body["n"].as_u64(), Some(2));
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn test_key_order_is_fixed() -> chatgen::Result<()>
{   let request = TextRequestBuilder::new()
      .user_content("Hi")?
      .build()?;
    let json = request.to_json()?;
    let model = json.find("\"model\"").expect("model key");
    let temperature = json.find("\"temperature\"").expect("temperature key");
    let n = json.find("\"n\"").expect("n key");
    let messages = json.find("\"messages\"").expect("messages key");
    assert!(model < temperature && temperature < n && n < messages);
    Ok(())
}

#[test]
fn test_model_wire_names()
{   assert_eq!(ModelType::Gpt4oMini.to_string(), "gpt-4o-mini");
    assert_eq!(ModelType::O1.as_str(), "o1");
    assert_eq!(ModelType::default(), ModelType::Gpt4oMini);
    assert_eq!(
      serde_json::to_string(&ModelType::DallE3).ok().as_deref(),
      Some("\"dall-e-3\"")
    );
    assert!(!ModelType::DallE2.is_text());
}

#[test]
fn test_chat_message_wire_shape()
{   let message = chatgen::ChatMessage
    {   role: MessageRole::Assistant
      , content: "earlier".to_string()
    };
    assert_eq!(
      serde_json::to_value(&message).ok(),
      Some(serde_json::json!({ "role": "assistant", "content": "earlier" }))
    );
}
