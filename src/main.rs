use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use natded::{display_error, lexer::lexer::tokenize, parser::parser::check};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "usage: natded <file> [--timings]";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let timings = args.iter().any(|arg| arg == "--timings");
    let files: Vec<&String> = args.iter().filter(|arg| *arg != "--timings").collect();

    let [file_path] = files.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let file_path = PathBuf::from(file_path.as_str());
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

    let start = Instant::now();

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            return ExitCode::from(2);
        }
    };

    let tokens = tokenize(&source, Some(file_name.clone()));

    if timings {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    let check_start = Instant::now();
    let checked = check(tokens, Rc::new(file_name));

    if timings {
        eprintln!("Checked in {:?}", check_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    match checked {
        Ok(proposition) => {
            debug!(%proposition, "proof accepted");
            println!("{}", proposition);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source, &file_path);
            ExitCode::from(1)
        }
    }
}
