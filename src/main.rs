use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use argh::FromArgs;
use exitcode::ExitCode;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xenapi::event::EventBatch;
use xenapi::types::Snapshot;
use xenapi::{Decode, DecodeError, Error, Value};

#[derive(FromArgs, Debug)]
/// Decode a captured XenAPI methodResponse document and print it as JSON.
struct Opts {
    #[argh(
        positional,
        description = "file holding the methodResponse document, stdin if omitted"
    )]
    input: Option<PathBuf>,

    #[argh(
        option,
        short = 'c',
        description = "decode the payload as a record of this class, e.g. VM or host"
    )]
    class: Option<String>,

    #[argh(switch, description = "decode the payload as an event.from batch")]
    events: bool,

    #[argh(
        switch,
        description = "decode the payload as a map of handle to record, as returned by get_all_records, requires --class"
    )]
    map: bool,

    #[argh(
        option,
        short = 'l',
        default = "String::from(\"info\")",
        description = "log level, XAPI_LOG takes precedence when set"
    )]
    log_level: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Raw(Value),
    Record(Snapshot),
    Records(BTreeMap<String, Snapshot>),
    Events(EventBatch),
}

fn main() {
    let opts: Opts = argh::from_env();

    let levels = std::env::var("XAPI_LOG").unwrap_or_else(|_| match opts.log_level.as_str() {
        "off" => "off".to_owned(),
        level => format!("xenapi={level},xapi_decode={level}"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(levels))
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(&opts))
}

fn run(opts: &Opts) -> ExitCode {
    if opts.map && opts.class.is_none() {
        eprintln!("--map requires --class");
        return exitcode::USAGE;
    }

    let text = match read_input(opts.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            error!(message = "read input failed", input = ?opts.input, %err);
            return exitcode::NOINPUT;
        }
    };

    let payload = match xenapi::check_document(&text) {
        Ok(payload) => payload,
        Err(Error::Api(err)) => {
            eprintln!("{err}");
            return exitcode::DATAERR;
        }
        Err(err) => {
            error!(message = "invalid response", %err);
            return exitcode::DATAERR;
        }
    };

    let output = match decode(opts, payload) {
        Ok(output) => output,
        Err(err) => {
            error!(message = "decode payload failed", %err);
            return exitcode::DATAERR;
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            exitcode::OK
        }
        Err(err) => {
            error!(message = "encode json failed", %err);
            exitcode::SOFTWARE
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn decode(opts: &Opts, payload: Value) -> Result<Output, DecodeError> {
    if opts.events {
        return EventBatch::decode(&payload).map(Output::Events);
    }

    let Some(class) = &opts.class else {
        return Ok(Output::Raw(payload));
    };

    if !opts.map {
        return Snapshot::decode(class, &payload).map(Output::Record);
    }

    let records = std::collections::HashMap::<String, Value>::decode(&payload)?;
    debug!(message = "decoding records", class, count = records.len());

    records
        .into_iter()
        .map(|(handle, record)| match Snapshot::decode(class, &record) {
            Ok(snapshot) => Ok((handle, snapshot)),
            Err(err) => Err(err.in_field(handle)),
        })
        .collect::<Result<BTreeMap<_, _>, DecodeError>>()
        .map(Output::Records)
}
