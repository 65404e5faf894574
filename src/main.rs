use gal::cli::{main_with, report, EXIT_FAILURE};

fn main() {
    let workdir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            report(&anyhow::Error::new(e).context("can not read the current directory"));
            std::process::exit(EXIT_FAILURE);
        }
    };
    main_with(std::env::args_os(), &workdir, |code| std::process::exit(code));
}
