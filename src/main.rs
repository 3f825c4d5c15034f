use std::env;
use std::error::Error;
use std::io;
use std::process;

use customer_directory::{demo_adjustments, demo_customers, load_customers, run, Customer};

fn main() {
    // Reports go to stdout; keep the log stream on stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let seed: Vec<Customer> = match args.as_slice() {
        [_] => demo_customers(),
        [_, path] => load_customers(path)?,
        _ => return Err("Usage: cargo run -- [customers.csv]".into()),
    };

    run(seed, &demo_adjustments(), io::stdout().lock())?;
    Ok(())
}
