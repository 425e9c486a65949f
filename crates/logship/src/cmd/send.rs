use std::fs;
use std::time::Duration;

use logship_client::{Client, ClientConfig};

use crate::cmd::SendArgs;
use crate::exit::{connect_error, send_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: SendArgs) -> CliResult<i32> {
    let timeout = parse_duration(&args.timeout)?;
    let payload = resolve_payload(&args)?;

    let config = ClientConfig {
        socket_path: args.path,
        client_id: args.client_id,
        write_timeout: Some(timeout),
        ..ClientConfig::default()
    };
    let client = Client::connect_with(config).map_err(|err| connect_error("connect failed", err))?;

    client
        .send(&payload)
        .map_err(|err| send_error("send failed", err))?;

    // Fire-and-forget: a close failure after a successful send is benign.
    let _ = client.close();

    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(json) = &args.json {
        serde_json::from_str::<serde_json::Value>(json)
            .map_err(|err| CliError::new(USAGE, format!("--json is not valid JSON: {err}")))?;
        return Ok(json.as_bytes().to_vec());
    }
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Ok(Vec::new())
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}
