use clap::Parser;
use packlist::cli::commands::Cli;
use packlist::io::config_io::load_config;
use packlist::io::logging::init_file_logger;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = init_file_logger(path)
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = match load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(title) = cli.title {
        config.title = title;
    }

    if let Err(e) = packlist::tui::run(config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
