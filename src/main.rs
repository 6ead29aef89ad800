use std::{io, path::PathBuf, process};

use clap::Parser;
use meth::{interpreter::value::core::Value, run_file};
use tracing_subscriber::EnvFilter;

/// meth is a small scripting language where everything is a method call.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    file: PathBuf,

    /// Arguments passed to the script, read with placeholders such as `_0_`.
    args: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                 .with_writer(io::stderr)
                                 .init();
    }

    let script_args = args.args.into_iter().map(Value::from).collect();
    let result = run_file(&args.file, script_args, &mut io::stdout().lock());

    match result {
        Ok(Some(result)) => println!("{result}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
