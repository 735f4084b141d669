// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::error::Error;
use std::fs;
use std::io;
use std::time::Instant;

use clap::{arg, Command};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use tapeil::compiler::Compiler;
use tapeil::exec;
use tapeil::normalize::normalize;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("tapeil")
        .about("An optimizing compiler and executor for an eight-command tape language")
        .version("0.1.0")
        .arg(arg!(<INPUT_FILE> "Source file to run"))
        .arg(arg!(-t --timing "Report wall-clock execution time on stderr"))
        .arg(arg!(-v --verbose "Show verbose output"))
        .get_matches();

    let verbose = matches.is_present("verbose");
    if verbose {
        init_logging(LevelFilter::Debug);
    }

    let path = matches.get_one::<String>("INPUT_FILE").unwrap();
    let timing = matches.is_present("timing");

    match run(path, timing) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("tapeil: {e}");
            std::process::exit(1);
        }
    }
}

fn run(path: &str, timing: bool) -> tapeil::error::Result<()> {
    let source =
        fs::read(path).map_err(|e| tapeil::error::Error::SourceIo(e.to_string()))?;

    let tokens = normalize(&source);
    let code = Compiler::compile(&tokens)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = io::BufWriter::new(stdout.lock());

    let start = Instant::now();
    exec::execute(&code, &mut input, &mut output)?;
    let elapsed = start.elapsed();

    if timing {
        eprintln!("tapeil: executed in {:.3}s", elapsed.as_secs_f64());
    }

    Ok(())
}

/// Initialise logging using a suitable pattern.
fn init_logging(level: LevelFilter) {
    let encoder = PatternEncoder::new("[{l}] {m}{n}");

    let stdout = ConsoleAppender::builder().encoder(Box::new(encoder)).build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .unwrap();

    let _handle = log4rs::init_config(config).unwrap();
}
