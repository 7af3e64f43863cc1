use anyhow::Context;
use setscript::Interpreter;
use std::{env, fs, process};

fn main() -> anyhow::Result<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("Usage: setscript <script>");
        process::exit(1);
    }

    let source =
        fs::read_to_string(&args[0]).with_context(|| format!("reading {}", &args[0]))?;

    let mut interpreter = Interpreter::new();
    interpreter.run(&source)?;
    Ok(())
}
