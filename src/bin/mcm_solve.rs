use std::env;

use mcm_dp::{Dimensions, ErrorKind, SolveResult, SolverBuilder};
use serde_json::{json, Value};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("mcm_solve: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let result = Dimensions::from_request(&options.body).and_then(|dims| {
        SolverBuilder::new()
            .parallel(options.parallel)
            .record_steps(options.record_steps)
            .build_for(dims.n())
            .solve(&dims)
    });

    let result = match result {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err.to_json());
            let code = match err.kind() {
                ErrorKind::InvalidInput => 2,
                ErrorKind::Internal => 1,
            };
            std::process::exit(code);
        }
    };

    if let Err(err) = options.format.write(&result) {
        eprintln!("mcm_solve output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    body: Value,
    parallel: bool,
    record_steps: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Json;
        let mut body = None;
        let mut dims = Vec::new();
        let mut parallel = false;
        let mut record_steps = true;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--json=") {
                body = Some(parse_body(value)?);
            } else if arg == "--json" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --json".to_string())?
                    .into();
                body = Some(parse_body(&value)?);
            } else if arg == "--parallel" {
                parallel = true;
            } else if arg == "--no-steps" {
                record_steps = false;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                // Keep malformed entries so validation reports them by index.
                dims.push(serde_json::from_str(&arg).unwrap_or(Value::String(arg)));
            }
        }

        let body = match body {
            Some(_) if !dims.is_empty() => {
                return Err("pass either --json or positional dimensions, not both".to_string())
            }
            Some(body) => body,
            None if dims.is_empty() => return Err("no dimensions given".to_string()),
            None => json!({ "dimensions": dims }),
        };

        Ok(Self {
            format,
            body,
            parallel,
            record_steps,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: mcm_solve [options] <p0> <p1> ... <pn>
       mcm_solve [options] --json '{{\"dimensions\": [10, 30, 5, 60]}}'

Options:
  --format <json|text>     Output format (default: json)
  --json <body>            Request body with a 'dimensions' list
  --parallel               Fill long chains with rayon (needs the 'parallel' feature)
  --no-steps               Omit the derivation log
  -h, --help               Print this help message

Exit status: 0 on success, 2 on invalid input, 1 on internal failure.
"
        );
    }
}

fn parse_body(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid JSON body: {err}"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, result: &SolveResult) -> Result<(), String> {
        match self {
            OutputFormat::Json => {
                let text = serde_json::to_string_pretty(result).map_err(|e| e.to_string())?;
                println!("{text}");
            }
            OutputFormat::Text => write_text(result),
        }
        Ok(())
    }
}

fn write_text(result: &SolveResult) {
    println!("Matrices:                  {}", result.n);
    println!("Minimum scalar mults:      {}", result.minimum_cost);
    println!("Optimal parenthesization:  {}", result.optimal_parenthesization);

    if !result.steps.is_empty() {
        println!();
        println!("Derivation:");
        for line in &result.steps {
            println!("  {line}");
        }
    }

    println!();
    if result.execution_order.is_empty() {
        println!("Single matrix: nothing to multiply.");
        return;
    }
    println!("Execution order:");
    for s in &result.execution_order {
        println!(
            "  {:>3}. {:<48} {:<28} -> {} ({})",
            s.step,
            s.description(),
            s.calculation(),
            s.result_name,
            s.result_dims()
        );
    }
}
