fn main() {
    if let Err(e) = ccshare::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
