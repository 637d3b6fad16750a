use chatgen::{Error, TextResponse};

const SAMPLE: &str = r#"{"id":"chatcmpl-X","object":"chat.completion","created":100,"model":"gpt-4o","choices":[{"message":{"content":"Hello"}}],"usage":{"prompt_tokens":9,"completion_tokens":10,"total_tokens":19,"prompt_tokens_details":{"cached_tokens":1,"audio_tokens":2},"completion_tokens_details":{"reasoning_tokens":3,"accepted_prediction_tokens":4,"rejected_prediction_tokens":5}}}"#;

const FULL: &str = r#"{"id":"chatcmpl-AzkGLeWZqZHLOinIx34q6ueEOAHN7","object":"chat.completion","created":1739279205,"model":"gpt-4o-2024-08-06","choices":[{"index":0,"message":{"role":"assistant","content":"This is Test!","refusal":null},"logprobs":null,"finish_reason":"stop"}],"usage":{"prompt_tokens":9,"completion_tokens":10,"total_tokens":19,"prompt_tokens_details":{"cached_tokens":1,"audio_tokens":2},"completion_tokens_details":{"reasoning_tokens":3,"audio_tokens":33,"accepted_prediction_tokens":4,"rejected_prediction_tokens":5}},"service_tier":"default","system_fingerprint":"fp_50cad350e4"}"#;

fn sample() -> TextResponse
{   TextResponse::parse(SAMPLE).expect("sample parses")
}

fn assert_lookup_error<T: std::fmt::Debug>(
  result: chatgen::Result<T>
, expected_path: &str
)
{   match result
    {   Err(Error::FieldLookup { path, .. }) => {
          assert_eq!(path, expected_path);
        }
      , other => panic!("Expected FieldLookup, got {:?}", other)
    }
}

#[test]
fn test_empty_and_blank_bodies_rejected()
{   for body in ["", "   ", "\n\t"]
    {   assert!(matches!(
          TextResponse::parse(body),
          Err(Error::ResponseParse(_))
        ));
    }
}

#[test]
fn test_non_json_and_non_object_rejected()
{   for body in ["not json", "{\"id\":", "[1,2,3]", "42", "\"text\"", "null"]
    {   assert!(
          matches!(TextResponse::parse(body), Err(Error::ResponseParse(_))),
          "body {:?} should be rejected", body
        );
    }
}

#[test]
fn test_sample_reply_fields() -> chatgen::Result<()>
{   let response = sample();
    assert_eq!(response.id()?, "chatcmpl-X");
    assert_eq!(response.object()?, "chat.completion");
    assert_eq!(response.created()?, 100);
    assert_eq!(response.model()?, "gpt-4o");
    assert_eq!(response.content()?, "Hello");
    assert_eq!(response.choices()?.len(), 1);
    Ok(())
}

#[test]
fn test_sample_reply_usage() -> chatgen::Result<()>
{   let response = sample();
    assert_eq!(response.prompt_tokens()?, 9);
    assert_eq!(response.completion_tokens()?, 10);
    assert_eq!(response.total_tokens()?, 19);
    assert_eq!(response.cached_tokens()?, 1);
    assert_eq!(response.audio_tokens()?, 2);
    assert_eq!(response.reasoning_tokens()?, 3);
    assert_eq!(response.accepted_prediction_tokens()?, 4);
    assert_eq!(response.rejected_prediction_tokens()?, 5);
    Ok(())
}

#[test]
fn test_full_reply_fields() -> chatgen::Result<()>
{   let response: TextResponse = FULL.parse()?;
    assert_eq!(response.full_response(), FULL);
    assert_eq!(response.id()?, "chatcmpl-AzkGLeWZqZHLOinIx34q6ueEOAHN7");
    assert_eq!(response.model()?, "gpt-4o-2024-08-06");
    assert_eq!(response.created()?, 1739279205);
    assert_eq!(response.system_fingerprint()?, "fp_50cad350e4");
    assert_eq!(response.content()?, "This is Test!");
    assert_eq!(response.choices()?[0]["finish_reason"], "stop");
    assert_eq!(response.as_json()["service_tier"], "default");
    // Completion-side audio tokens are not the prompt-side count.
    assert_eq!(response.audio_tokens()?, 2);
    Ok(())
}

#[test]
fn test_missing_fingerprint_is_lookup_error()
{   assert_lookup_error(sample().system_fingerprint(), "system_fingerprint");
}

#[test]
fn test_missing_prompt_details_is_lookup_error() -> chatgen::Result<()>
{   let response = TextResponse::parse(
      r#"{"id":"x","usage":{"prompt_tokens":3}}"#
    )?;
    assert_eq!(response.prompt_tokens()?, 3);
    assert_lookup_error(
      response.cached_tokens(),
      "usage.prompt_tokens_details"
    );
    assert_lookup_error(
      response.reasoning_tokens(),
      "usage.completion_tokens_details"
    );
    Ok(())
}

#[test]
fn test_missing_usage_is_lookup_error() -> chatgen::Result<()>
{   let response = TextResponse::parse(r#"{"id":"x"}"#)?;
    assert_lookup_error(response.total_tokens(), "usage");
    assert_lookup_error(response.choices(), "choices");
    assert_lookup_error(response.content(), "choices");
    Ok(())
}

#[test]
fn test_content_lookup_failures() -> chatgen::Result<()>
{   let empty = TextResponse::parse(r#"{"choices":[]}"#)?;
    assert_lookup_error(empty.content(), "choices[0].message.content");

    let no_message = TextResponse::parse(r#"{"choices":[{"index":0}]}"#)?;
    assert_lookup_error(no_message.content(), "choices[0].message.content");

    let null_content = TextResponse::parse(
      r#"{"choices":[{"message":{"content":null}}]}"#
    )?;
    assert_lookup_error(
      null_content.content(),
      "choices[0].message.content"
    );
    Ok(())
}

#[test]
fn test_wrong_types_are_lookup_errors() -> chatgen::Result<()>
{   let response = TextResponse::parse(
      r#"{"id":7,"created":"yesterday","usage":"none"}"#
    )?;
    assert_lookup_error(response.id(), "id");
    assert_lookup_error(response.created(), "created");
    assert_lookup_error(response.prompt_tokens(), "usage");
    Ok(())
}
