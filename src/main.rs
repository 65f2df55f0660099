// cedarc: Cedar source → textual IR

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use cedarc::codegen::IrGenerator;
use cedarc::options::{DefineBody, Options, QuotePolicy};
use cedarc::parser::parse::Parser;

struct Args {
    input: String,
    output: Option<String>,
    dump_ast: bool,
    options: Options,
}

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} [options] <file.cedar>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o <file>               Write IR to <file> instead of stdout");
    eprintln!("  --ast                   Print the syntax tree instead of IR");
    eprintln!("  --keep-quotes           Keep quote characters in string values");
    eprintln!("  --discard-define-body   Drop statements nested in define blocks");
    process::exit(1);
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("cedarc");

    let mut input = None;
    let mut output = None;
    let mut dump_ast = false;
    let mut options = Options::new();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-o" => match rest.next() {
                Some(path) => output = Some(path.clone()),
                None => {
                    eprintln!("Error: -o needs a file name");
                    usage(program_name);
                }
            },
            "--ast" => dump_ast = true,
            "--keep-quotes" => options = options.with_quotes(QuotePolicy::Keep),
            "--discard-define-body" => options = options.with_define_body(DefineBody::Discard),
            "-h" | "--help" => usage(program_name),
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", flag);
                usage(program_name);
            }
            path => {
                if input.replace(path.to_string()).is_some() {
                    eprintln!("Error: More than one input file given");
                    usage(program_name);
                }
            }
        }
    }

    let Some(input) = input else {
        eprintln!("Error: No input file provided");
        eprintln!();
        usage(program_name);
    };

    Args {
        input,
        output,
        dump_ast,
        options,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    if !Path::new(&args.input).exists() {
        eprintln!("Error: File '{}' not found", args.input);
        process::exit(1);
    }

    let source = fs::read_to_string(&args.input)?;

    eprintln!("Parsing {}...", args.input);
    let program = match Parser::with_options(&source, args.options.clone()).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    eprintln!(
        "Parsed successfully. Found {} top-level statements.",
        program.children.len()
    );

    if args.dump_ast {
        print!("{}", program);
        return Ok(());
    }

    // Nothing touches the output until the IR exists in full
    let ir = match IrGenerator::new(&args.options).generate(&program) {
        Ok(ir) => ir,
        Err(e) => {
            eprintln!("Code generation error: {}", e);
            process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &ir) {
                eprintln!("Error: Failed to write '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("IR written to {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(ir.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error: Failed to write IR: {}", e);
                process::exit(1);
            }
        }
    }

    Ok(())
}
