use serde_json::Value;

use crate::api::params::Parameter;
use crate::api::request::{is_credential_key, HttpMethod};
use crate::api::BlockKind;
use crate::cli::args::CallArgs;
use crate::cli::GlobalOptions;
use crate::error::{Result, WgApiError};

use super::{create_client, print_json};

/// Parameters of a raw call, with the access token split out
#[derive(Debug, Default)]
struct CallParams {
    params: Vec<Parameter>,
    access_token: Option<String>,
}

/// Parse `--param key=value` arguments. `access_token` is routed to the
/// builder's token; `application_id` comes from `--application-id` only.
fn parse_params(raw: &[String]) -> Result<CallParams> {
    let mut parsed = CallParams::default();
    for item in raw {
        let param: Parameter = item.parse()?;
        if !is_credential_key(&param.key) {
            parsed.params.push(param);
        } else if param.key == "access_token" {
            parsed.access_token = Some(param.value.to_string());
        } else {
            return Err(WgApiError::configuration(
                "application_id cannot be passed as --param; use --application-id",
            ));
        }
    }
    Ok(parsed)
}

/// Execute an arbitrary method and print its `data`
pub async fn execute(args: CallArgs, global: &GlobalOptions) -> Result<()> {
    let kind: BlockKind = args.block.parse()?;
    let call = parse_params(&args.params)?;
    let method = if args.post {
        HttpMethod::Post
    } else {
        HttpMethod::Get
    };

    let client = create_client(global)?;
    let context = client.context()?;
    let mut builder = context.request(kind, &args.action).with_parameters(call.params);
    if let Some(token) = call.access_token {
        builder = builder.with_access_token(token);
    }

    let data = context
        .execute::<Value>(method, &builder)
        .await?
        .into_result()?
        .unwrap_or(Value::Null);
    print_json(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_access_token_param_becomes_token() {
        let call = parse_params(&raw(&["search=Ivan", "access_token=secret"])).unwrap();
        assert_eq!(call.params, vec![Parameter::new("search", "Ivan")]);
        assert_eq!(call.access_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_application_id_param_rejected() {
        let err = parse_params(&raw(&["application_id=other"])).unwrap_err();
        assert!(matches!(err, WgApiError::Configuration(_)));
    }

    #[test]
    fn test_malformed_param_rejected() {
        assert!(parse_params(&raw(&["search"])).is_err());
    }
}
