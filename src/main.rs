fn main() {
    // Diagnostics go through `log`, controlled by RUST_LOG
    let _ = env_logger::try_init();

    // 1. Parse commandline arguments
    let cli_args = mymath::args::parse_cli_args();

    // 2. Run the command
    if let Err(err) = mymath::run_command(cli_args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
