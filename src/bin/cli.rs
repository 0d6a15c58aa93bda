// src/bin/cli.rs
use gnomad_scrape::{cli, error::Error};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::run() {
        Ok(()) => Ok(()),
        Err(Error::UnsupportedBrowser(_)) => {
            eprintln!("please use one of the two supported web browser: Firefox or Google Chrome");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
