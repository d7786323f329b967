#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use huebox::gradient::Gradient;
use huebox::{from_string, ColorFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huebox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut status = ExitCode::SUCCESS;
    for argument in std::env::args().skip(1) {
        if argument.contains("gradient(") {
            match Gradient::parse(&argument) {
                Ok(gradient) => {
                    println!("{}", gradient);
                    println!("    preview  {}", gradient.preview());
                }
                Err(error) => {
                    eprintln!("{}: {}", argument, error);
                    status = ExitCode::FAILURE;
                }
            }
            continue;
        }

        match from_string(&argument) {
            Ok(color) => {
                println!("{}", argument);
                for format in ColorFormat::ALL {
                    println!("    {:<7}  {}", format.tag(), color.to(format));
                }
            }
            Err(error) => {
                eprintln!("{}: {}", argument, error);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
