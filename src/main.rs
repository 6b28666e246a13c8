use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use frontend::{
    display_error, lexer::lexer::tokenize, parser::parser::parse_with_globals,
    scope::symbol::Symbol,
};
use tracing::{error, info, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const DEMO_SOURCE: &str = r#"// Demonstration program
var limit: int = 5;
var total = 0;

function add(a, b) {
    return a + b;
}

for (var i = 0; i < limit; i = i + 1) {
    total = add(total, i);
}

switch (total) {
    case 10: print("ten");
    default: print(total);
}

try {
    print("done");
} catch (e) {
    print(e);
} finally {
    print(!limit == -total);
}
"#;

struct Args {
    print_tokens: bool,
    verbose: bool,
    file: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        print_tokens: false,
        verbose: false,
        file: None,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => args.print_tokens = true,
            "--verbose" => args.verbose = true,
            _ => args.file = Some(arg),
        }
    }

    args
}

fn main() -> ExitCode {
    let args = parse_args();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(BoxMakeWriter::new(std::io::stderr))
        .init();

    let (file_name, source) = match &args.file {
        Some(path) => match read_to_string(path) {
            Ok(source) => (path.clone(), source),
            Err(err) => {
                error!("failed to read {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => (String::from("<demo>"), String::from(DEMO_SOURCE)),
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&err, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    info!("tokenized {} in {:?}", file_name, start.elapsed());

    if args.print_tokens {
        for token in &tokens {
            token.debug();
        }
        println!();
    }

    let parse_start = Instant::now();
    let (_, result) = parse_with_globals(tokens, vec![Symbol::builtin_function("print")]);

    let ast = match result {
        Ok(ast) => ast,
        Err(err) => {
            display_error(&err, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    info!("parsed in {:?}", parse_start.elapsed());

    for stmt in ast.iter() {
        println!("{}", stmt);
    }

    ExitCode::SUCCESS
}
