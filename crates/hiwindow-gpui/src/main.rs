mod cli;
mod error;
mod logging;
mod toolkit;
mod view;

use std::process::ExitCode;

use clap::Parser;
use gpui::{App, Application};
use hiwindow_core::{Greeting, HeadlessToolkit};
use tracing::{debug, error};

use crate::cli::Args;
use crate::error::AppError;
use crate::view::LabelStyle;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if !args.ignored.is_empty() {
        debug!(count = args.ignored.len(), "ignoring extra arguments");
    }
    let greeting = args.greeting();

    if args.headless {
        return match run_headless(&greeting) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "headless run failed");
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = toolkit::open(cx, &greeting, LabelStyle::default()) {
            error!(error = %e, "failed to open main window");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        cx.activate(true);
    });

    ExitCode::SUCCESS
}

fn run_headless(greeting: &Greeting) -> Result<String, AppError> {
    let mut toolkit = HeadlessToolkit::default();
    let shown = hiwindow_core::run_with(&mut toolkit, greeting)?;
    Ok(serde_json::to_string_pretty(&shown.snapshot())?)
}
