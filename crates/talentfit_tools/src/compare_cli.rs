#![forbid(unsafe_code)]

use std::fs;

use serde_json::{json, Value};
use talentfit_contracts::runtime::{CompareAllRequest, TalentFitRequest, TalentFitResponse};
use talentfit_engines::{gap_list, TalentFitConfig, TalentFitRuntime};
use tracing::info;

pub const USAGE: &str = "usage: talentfit compare <report.json> <benchmark.json> [--gaps]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareCommand {
    pub report_path: String,
    pub benchmark_path: String,
    pub gaps_only: bool,
}

pub fn parse_compare_args(args: &[String]) -> Result<CompareCommand, String> {
    if args.first().map(String::as_str) != Some("compare") {
        return Err(USAGE.to_string());
    }
    let mut positional = Vec::new();
    let mut gaps_only = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--gaps" => gaps_only = true,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}; {}", USAGE));
            }
            path => positional.push(path.to_string()),
        }
    }
    let [report_path, benchmark_path] =
        <[String; 2]>::try_from(positional).map_err(|_| USAGE.to_string())?;
    Ok(CompareCommand {
        report_path,
        benchmark_path,
        gaps_only,
    })
}

pub fn execute_compare_command(
    config: TalentFitConfig,
    command: &CompareCommand,
) -> Result<String, String> {
    let report_text = read_input(&command.report_path, config.max_report_bytes)?;
    let benchmark_text = read_input(&command.benchmark_path, config.max_report_bytes)?;
    render_compare_output(config, &report_text, &benchmark_text, command.gaps_only)
}

/// Runs one comparison over JSON text and renders the response as pretty JSON.
pub fn render_compare_output(
    config: TalentFitConfig,
    report_text: &str,
    benchmark_text: &str,
    gaps_only: bool,
) -> Result<String, String> {
    let raw_report = parse_json("report", report_text)?;
    let benchmark = parse_json("benchmark", benchmark_text)?;
    let req = CompareAllRequest::v1(Some(raw_report), Some(benchmark))
        .map_err(|violation| format!("invalid request: {violation:?}"))?;

    let runtime = TalentFitRuntime::new(config);
    let output = match runtime.run(&TalentFitRequest::CompareAll(req)) {
        TalentFitResponse::CompareAllOk(ok) => {
            info!(items = ok.items.len(), global_fit = ?ok.summary.global_fit, "comparison ready");
            let items = if gaps_only {
                gap_list(&ok.items)
            } else {
                ok.items
            };
            json!({"items": items, "summary": ok.summary})
        }
        TalentFitResponse::Refuse(refuse) => {
            return Err(format!(
                "refused ({:#010x}): {}",
                refuse.reason_code.0, refuse.message
            ))
        }
    };
    serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
}

fn read_input(path: &str, max_bytes: usize) -> Result<String, String> {
    let metadata = fs::metadata(path).map_err(|e| format!("{path}: {e}"))?;
    if metadata.len() > max_bytes as u64 {
        return Err(format!("{path}: exceeds {max_bytes} bytes"));
    }
    fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))
}

fn parse_json(what: &str, text: &str) -> Result<Value, String> {
    serde_json::from_str(text).map_err(|e| format!("{what} is not valid json: {e}"))
}
