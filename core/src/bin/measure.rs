//! Run a slow function under `measure_time` and log how long it took.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::LevelFilter;
use pokedex_core::logging::init_logger;
use pokedex_core::measure_time;

#[derive(Debug)]
struct ProcessArgs {
    sleep_secs: u64,
    label: String,
}

fn process(args: ProcessArgs) {
    thread::sleep(Duration::from_secs(args.sleep_secs));
    println!("{}", args.label);
}

fn main() -> Result<()> {
    init_logger(LevelFilter::Info)?;
    measure_time(process).call(ProcessArgs {
        sleep_secs: 1,
        label: "valor2".to_string(),
    });
    Ok(())
}
